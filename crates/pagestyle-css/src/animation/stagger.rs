//! Per-child delays for staggered entrances.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::values::keyword::lenient_keyword;

/// Order in which children start animating.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum StaggerDirection {
    /// First child first.
    #[default]
    Forward,
    /// Last child first.
    Reverse,
    /// Middle child first, spreading outward.
    Center,
    /// Outermost children first, converging on the middle.
    Edges,
}

lenient_keyword!(StaggerDirection, "stagger direction");

/// Stagger settings of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaggerConfig {
    /// Whether children are staggered at all.
    pub enabled: bool,
    /// Delay step between neighbours in milliseconds.
    pub delay: f64,
    /// Start order.
    pub direction: StaggerDirection,
    /// Upper bound for any single child's delay in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay: Option<f64>,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay: 100.0,
            direction: StaggerDirection::Forward,
            max_delay: None,
        }
    }
}

/// Delay in milliseconds for child `index` of `total`.
///
/// - `forward`: `index * delay`
/// - `reverse`: `(total - 1 - index) * delay`
/// - `center`: distance from the middle index (`total / 2`) times `delay`
/// - `edges`: the largest center distance minus this child's, times `delay`
///
/// The result is capped at `max_delay`. A disabled stagger or a single child
/// yields 0.
///
/// Index 0 is not always 0: under `reverse` it is the last to start and
/// under `center` it waits `total / 2` steps. Only `forward` and `edges`
/// start the first child immediately.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn get_stagger_delay(index: usize, total: usize, config: &StaggerConfig) -> f64 {
    if !config.enabled || total <= 1 {
        return 0.0;
    }
    let middle = total / 2;
    let steps = match config.direction {
        StaggerDirection::Forward => index,
        StaggerDirection::Reverse => (total - 1).saturating_sub(index),
        StaggerDirection::Center => index.abs_diff(middle),
        StaggerDirection::Edges => middle.saturating_sub(index.abs_diff(middle)),
    };
    let delay = steps as f64 * config.delay;
    config.max_delay.map_or(delay, |max| delay.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(direction: StaggerDirection) -> StaggerConfig {
        StaggerConfig {
            enabled: true,
            delay: 100.0,
            direction,
            max_delay: None,
        }
    }

    #[test]
    fn test_center_starts_in_the_middle() {
        let delays: Vec<f64> = (0..5)
            .map(|i| get_stagger_delay(i, 5, &config(StaggerDirection::Center)))
            .collect();
        assert_eq!(delays, vec![200.0, 100.0, 0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_edges_inverts_center() {
        let delays: Vec<f64> = (0..5)
            .map(|i| get_stagger_delay(i, 5, &config(StaggerDirection::Edges)))
            .collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0, 100.0, 0.0]);
    }

    #[test]
    fn test_reverse_out_of_range_index_saturates() {
        assert_eq!(get_stagger_delay(9, 3, &config(StaggerDirection::Reverse)), 0.0);
    }
}
