//! Integration tests for the responsive compiler, visibility ranges and
//! scope class names.

use pagestyle_css::responsive::class_selector;
use pagestyle_css::values::{BorderSides, BorderStyle, SpacingUnit};
use pagestyle_css::visibility::BreakpointRange;
use pagestyle_css::{
    BorderValue, Breakpoint, ColorValue, CompiledStyles, MaybeResponsive, Responsive,
    SpacingValue, StyleProperties, VisibilityValue, border_value_to_css, compile,
    padding_value_to_css, scope_class, visibility_value_to_media_css,
};
use quickcheck_macros::quickcheck;

fn px(value: f64) -> SpacingValue {
    SpacingValue::linked(value, SpacingUnit::Px)
}

#[test]
fn test_none_compiles_to_nothing() {
    let compiled = compile::<SpacingValue, _>(None, padding_value_to_css, "pad");
    assert!(compiled.is_empty());
    assert_eq!(compiled, CompiledStyles::default());
}

#[test]
fn test_plain_value_stays_inline() {
    let value = MaybeResponsive::Plain(px(8.0));
    let compiled = compile(Some(&value), padding_value_to_css, "pad");
    assert_eq!(compiled.base_styles.to_string(), "padding: 8px;");
    assert!(compiled.media_query_css.is_empty());
}

#[test]
fn test_responsive_value_emits_only_explicit_breakpoints() {
    let value = MaybeResponsive::Responsive(
        Responsive::new(px(8.0)).with(Breakpoint::Md, px(24.0)),
    );
    let compiled = compile(Some(&value), padding_value_to_css, "ps-hero");
    assert!(compiled.base_styles.is_empty());
    assert_eq!(
        compiled.media_query_css,
        ".ps-hero { padding: 8px; }\n\
         @media (min-width: 768px) { .ps-hero { padding: 24px; } }"
    );
    assert!(!compiled.media_query_css.contains("640px"));
    assert!(!compiled.media_query_css.contains("1024px"));
    assert!(!compiled.media_query_css.contains("1280px"));
}

#[test]
fn test_converter_none_skips_the_breakpoint() {
    let value = MaybeResponsive::Responsive(
        Responsive::new(Some(4.0_f64))
            .with(Breakpoint::Sm, None)
            .with(Breakpoint::Lg, Some(12.0)),
    );
    let compiled = compile(
        Some(&value),
        |gap: &Option<f64>| gap.map(|g| StyleProperties::new().with("gap", format!("{g}px"))),
        "grid",
    );
    assert_eq!(
        compiled.media_query_css,
        ".grid { gap: 4px; }\n@media (min-width: 1024px) { .grid { gap: 12px; } }"
    );
}

#[test]
fn test_border_none_override_keeps_the_base_rule() {
    let solid = BorderValue {
        style: BorderStyle::Solid,
        width: 1.0,
        color: ColorValue::new("#000"),
        radius: 0.0,
        sides: BorderSides::ALL,
    };
    let removed = BorderValue {
        style: BorderStyle::None,
        ..solid.clone()
    };
    let value = MaybeResponsive::Responsive(Responsive::new(solid).with(Breakpoint::Md, removed));
    let compiled = compile(Some(&value), border_value_to_css, "card");
    assert_eq!(compiled.media_query_css, ".card { border: 1px solid #000000; }");
}

#[test]
fn test_compile_is_idempotent() {
    let value = MaybeResponsive::Responsive(
        Responsive::new(px(4.0))
            .with(Breakpoint::Sm, px(8.0))
            .with(Breakpoint::Xl, px(32.0)),
    );
    let first = compile(Some(&value), padding_value_to_css, "a");
    let second = compile(Some(&value), padding_value_to_css, "a");
    assert_eq!(first, second);
}

#[test]
fn test_envelope_is_detected_when_decoding() {
    let responsive: MaybeResponsive<SpacingValue> = serde_json::from_str(
        r#"{"xs": {"top": 8, "linked": true}, "lg": {"top": 16, "linked": true}}"#,
    )
    .unwrap();
    assert!(responsive.is_responsive());

    let plain: MaybeResponsive<SpacingValue> =
        serde_json::from_str(r#"{"top": 8, "linked": true}"#).unwrap();
    assert_eq!(plain, MaybeResponsive::Plain(px(8.0)));
}

#[test]
fn test_resolve_falls_back_to_smaller_breakpoint() {
    let value = Responsive::new("a").with(Breakpoint::Md, "c");
    assert_eq!(*value.resolve(Breakpoint::Sm), "a");
    assert_eq!(*value.resolve(Breakpoint::Lg), "c");
}

#[test]
fn test_visibility_hidden_at_sm_only() {
    let value = VisibilityValue::visible()
        .with(Breakpoint::Sm, false)
        .with(Breakpoint::Md, true);
    assert_eq!(
        value.hidden_ranges(),
        vec![BreakpointRange {
            from: Breakpoint::Sm,
            to: Breakpoint::Sm,
        }]
    );
    assert_eq!(
        visibility_value_to_media_css(value, "ps-nav"),
        "@media (min-width: 640px) and (max-width: 767px) { .ps-nav { display: none !important; } }"
    );
}

#[test]
fn test_visibility_merges_contiguous_ranges() {
    let value = VisibilityValue::visible()
        .with(Breakpoint::Md, false)
        .with(Breakpoint::Xl, false);
    assert_eq!(
        visibility_value_to_media_css(value, "x"),
        "@media (min-width: 768px) { .x { display: none !important; } }"
    );
}

#[test]
fn test_visibility_hidden_on_mobile_only() {
    let value = VisibilityValue::visible()
        .with(Breakpoint::Xs, false)
        .with(Breakpoint::Md, true);
    assert_eq!(
        visibility_value_to_media_css(value, "x"),
        "@media (max-width: 767px) { .x { display: none !important; } }"
    );
}

#[test]
fn test_visibility_extremes() {
    assert!(visibility_value_to_media_css(VisibilityValue::default(), "x").is_empty());
    let hidden = VisibilityValue::visible().with(Breakpoint::Xs, false);
    assert_eq!(
        visibility_value_to_media_css(hidden, "x"),
        ".x { display: none !important; }"
    );
}

#[test]
fn test_visibility_two_separate_ranges() {
    let value = VisibilityValue {
        xs: false,
        sm: Some(true),
        md: None,
        lg: Some(false),
        xl: Some(true),
    };
    assert_eq!(
        visibility_value_to_media_css(value, "x"),
        "@media (max-width: 639px) { .x { display: none !important; } }\n\
         @media (min-width: 1024px) and (max-width: 1279px) { .x { display: none !important; } }"
    );
}

#[test]
fn test_scope_class_is_stable_and_valid() {
    let value = Responsive::new(px(8.0)).with(Breakpoint::Md, px(16.0));
    let class = scope_class(&value, "section/padding");
    assert_eq!(class, scope_class(&value, "section/padding"));
    assert_eq!(class.len(), "ps-".len() + 16);
    assert!(class.starts_with("ps-"));
    assert_ne!(class, scope_class(&Responsive::new(px(8.0)), "section/padding"));
    assert_eq!(class_selector(&class), format!(".{class}"));
}

#[quickcheck]
fn prop_compile_is_deterministic(xs: u8, md: Option<u8>, xl: Option<u8>) -> bool {
    let mut responsive = Responsive::new(px(f64::from(xs)));
    if let Some(md) = md {
        responsive = responsive.with(Breakpoint::Md, px(f64::from(md)));
    }
    if let Some(xl) = xl {
        responsive = responsive.with(Breakpoint::Xl, px(f64::from(xl)));
    }
    let value = MaybeResponsive::Responsive(responsive);
    let class = scope_class(&value, "prop");
    let first = compile(Some(&value), padding_value_to_css, &class);
    let second = compile(Some(&value), padding_value_to_css, &class);
    first == second && first.base_styles.is_empty() && first.media_query_css.starts_with('.')
}
