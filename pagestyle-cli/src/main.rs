//! pagestyle CLI
//!
//! Compiles stored style values (JSON) to the inline styles and stylesheet
//! text a renderer would emit. Useful for checking what a document's values
//! turn into without running the page.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use pagestyle_css::animation::EntranceStyles;
use pagestyle_css::{
    AnimationValue, BackgroundValue, BorderValue, CompiledStyles, MaybeResponsive, ShadowValue,
    SpacingValue, StaggerConfig, StaggerDirection, StyleProperties, TransformValue,
    VisibilityValue, WidthInput, animation_value_to_css, background_value_to_css,
    border_value_to_css, compile, decode, decode_value, get_entrance_animation_styles,
    get_stagger_delay, margin_value_to_css, padding_value_to_css, scope_class,
    shadow_value_to_css, transform_value_to_css, visibility_value_to_media_css,
    width_value_to_css,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(name = "pagestyle")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Responsive padding from a file
    pagestyle compile padding ./padding.json

    # Legacy or current width value from stdin, with a fixed class
    echo '{"mode":"contained","maxWidth":960,"unit":"px"}' | pagestyle compile dimensions --class hero

    # Visibility ranges
    pagestyle visibility --class nav ./visibility.json

    # Entrance state pair as JSON
    pagestyle --json entrance ./animation.json

    # Stagger delays for six children
    pagestyle stagger --count 6 --delay 80 --direction center
"#)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a possibly responsive value to inline styles and media CSS
    Compile {
        /// Kind of value stored in the input
        kind: ValueKind,

        /// JSON input file (stdin when omitted or `-`)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Class name for the generated rules (derived from the value when omitted)
        #[arg(long, value_name = "NAME")]
        class: Option<String>,

        /// Render-scope key mixed into the derived class name
        #[arg(long, value_name = "KEY", default_value = "root")]
        scope: String,
    },

    /// Compile a visibility value to `display: none` media rules
    Visibility {
        /// JSON input file (stdin when omitted or `-`)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Class name for the generated rules (derived from the value when omitted)
        #[arg(long, value_name = "NAME")]
        class: Option<String>,
    },

    /// Print the entrance state pair and transition of an animation value
    Entrance {
        /// JSON input file (stdin when omitted or `-`)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print per-child stagger delays
    Stagger {
        /// Number of children
        #[arg(long)]
        count: usize,

        /// Delay step between neighbours in milliseconds
        #[arg(long)]
        delay: f64,

        /// Start order: forward, reverse, center or edges
        #[arg(long, default_value_t = StaggerDirection::Forward)]
        direction: StaggerDirection,

        /// Upper bound for any single delay in milliseconds
        #[arg(long, value_name = "MS")]
        max_delay: Option<f64>,
    },
}

/// Value kinds `compile` understands.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ValueKind {
    Padding,
    Margin,
    Dimensions,
    Background,
    Border,
    Transform,
    Animation,
    Shadow,
}

impl ValueKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::Dimensions => "dimensions",
            Self::Background => "background",
            Self::Border => "border",
            Self::Transform => "transform",
            Self::Animation => "animation",
            Self::Shadow => "shadow",
        }
    }
}

/// A compiled value together with the class its rules are keyed by.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompileOutput {
    class_name: String,
    #[serde(flatten)]
    styles: CompiledStyles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            kind,
            file,
            class,
            scope,
        } => {
            let raw: Value = decode(kind.name(), &read_input(file.as_deref())?)
                .with_context(|| format!("Failed to decode {} value", kind.name()))?;
            let output = compile_kind(kind, raw, class.as_deref(), &scope)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_compiled(&output);
            }
        }
        Command::Visibility { file, class } => {
            let value: VisibilityValue = decode("visibility", &read_input(file.as_deref())?)
                .context("Failed to decode visibility value")?;
            let class = class.unwrap_or_else(|| scope_class(&value, "visibility"));
            let css = visibility_value_to_media_css(value, &class);
            if cli.json {
                let output = json!({ "className": class, "mediaQueryCss": css });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", format!("=== Visibility (.{class}) ===").bold());
                if css.is_empty() {
                    println!("{}", "visible at every breakpoint".dimmed());
                } else {
                    println!("{css}");
                }
            }
        }
        Command::Entrance { file } => {
            let value: AnimationValue = decode("animation", &read_input(file.as_deref())?)
                .context("Failed to decode animation value")?;
            let styles = get_entrance_animation_styles(&value);
            if cli.json {
                let output = json!({
                    "entrance": styles,
                    "scrollTrigger": value.scroll_trigger(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_entrance(&value, styles.as_ref());
            }
        }
        Command::Stagger {
            count,
            delay,
            direction,
            max_delay,
        } => {
            let config = StaggerConfig {
                enabled: true,
                delay,
                direction,
                max_delay,
            };
            let delays: Vec<f64> = (0..count)
                .map(|index| get_stagger_delay(index, count, &config))
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&delays)?);
            } else {
                println!("{}", format!("=== Stagger ({direction}) ===").bold());
                for (index, delay) in delays.iter().enumerate() {
                    println!("  child {index:>3}: {delay}ms");
                }
            }
        }
    }

    Ok(())
}

/// Read the whole input from `path`, or from stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            let _ = io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Decode `raw` as a possibly responsive `T` and compile it with `converter`.
fn compile_as<T, F>(
    kind: ValueKind,
    raw: Value,
    converter: F,
    class: Option<&str>,
    scope: &str,
) -> Result<CompileOutput>
where
    T: DeserializeOwned + Serialize,
    F: Fn(&T) -> Option<StyleProperties>,
{
    let value: MaybeResponsive<T> = decode_value(kind.name(), raw)?;
    let class_name = class.map_or_else(
        || scope_class(&value, &format!("{scope}/{}", kind.name())),
        ToString::to_string,
    );
    let styles = compile(Some(&value), converter, &class_name);
    Ok(CompileOutput { class_name, styles })
}

fn compile_kind(
    kind: ValueKind,
    raw: Value,
    class: Option<&str>,
    scope: &str,
) -> Result<CompileOutput> {
    match kind {
        ValueKind::Padding => {
            compile_as::<SpacingValue, _>(kind, raw, padding_value_to_css, class, scope)
        }
        ValueKind::Margin => {
            compile_as::<SpacingValue, _>(kind, raw, margin_value_to_css, class, scope)
        }
        ValueKind::Dimensions => {
            compile_as::<WidthInput, _>(kind, raw, width_value_to_css, class, scope)
        }
        ValueKind::Background => {
            compile_as::<BackgroundValue, _>(kind, raw, background_value_to_css, class, scope)
        }
        ValueKind::Border => {
            compile_as::<BorderValue, _>(kind, raw, border_value_to_css, class, scope)
        }
        ValueKind::Transform => {
            compile_as::<TransformValue, _>(kind, raw, transform_value_to_css, class, scope)
        }
        ValueKind::Animation => {
            compile_as::<AnimationValue, _>(kind, raw, animation_value_to_css, class, scope)
        }
        ValueKind::Shadow => {
            compile_as::<ShadowValue, _>(kind, raw, shadow_value_to_css, class, scope)
        }
    }
}

fn print_compiled(output: &CompileOutput) {
    println!("{}", "=== Inline Styles ===".bold());
    if output.styles.base_styles.is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        for (property, value) in output.styles.base_styles.iter() {
            println!("  {}: {value};", property.cyan());
        }
    }

    println!("\n{}", format!("=== Media CSS (.{}) ===", output.class_name).bold());
    if output.styles.media_query_css.is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        println!("{}", output.styles.media_query_css);
    }
}

fn print_entrance(value: &AnimationValue, styles: Option<&EntranceStyles>) {
    let Some(styles) = styles else {
        println!("{}", "No entrance animation".dimmed());
        return;
    };

    println!("{}", format!("=== Entrance ({}) ===", value.entrance()).bold());
    println!("{} {}", "initial:".cyan(), styles.initial);
    println!("{} {}", "animate:".cyan(), styles.animate);
    println!("{} {}", "transition:".cyan(), styles.transition);

    match value.scroll_trigger() {
        Some(trigger) => println!(
            "{} threshold {}, once {}, margin {}",
            "trigger:".cyan(),
            trigger.threshold,
            trigger.once,
            trigger.root_margin
        ),
        None => println!("{} on load", "trigger:".cyan()),
    }
}
