//! Integration tests for entrance presets, custom transitions and stagger.

use pagestyle_css::animation::AnimationMode;
use pagestyle_css::values::AnchorPosition;
use pagestyle_css::{
    AnimationValue, Easing, EntrancePreset, StaggerConfig, StaggerDirection,
    animation_value_to_css, get_child_entrance_styles, get_entrance_animation_styles,
    get_stagger_delay,
};

fn stagger(direction: StaggerDirection, max_delay: Option<f64>) -> StaggerConfig {
    StaggerConfig {
        enabled: true,
        delay: 80.0,
        direction,
        max_delay,
    }
}

#[test]
fn test_fade_up_pair() {
    let styles = get_entrance_animation_styles(&AnimationValue::preset(EntrancePreset::FadeUp))
        .unwrap();
    assert_eq!(
        styles.initial.to_string(),
        "opacity: 0; transform: translateY(24px);"
    );
    assert_eq!(
        styles.animate.to_string(),
        "opacity: 1; transform: translateY(0px);"
    );
    assert_eq!(
        styles.transition,
        "opacity 600ms ease 0ms, transform 600ms ease 0ms"
    );
}

#[test]
fn test_distance_scales_the_offset() {
    let value = AnimationValue {
        distance: Some(60.0),
        entrance_duration: Some(900.0),
        entrance_delay: Some(150.0),
        ..AnimationValue::preset(EntrancePreset::FadeLeft)
    };
    let styles = get_entrance_animation_styles(&value).unwrap();
    assert_eq!(styles.initial.get("transform"), Some("translateX(60px)"));
    assert_eq!(
        styles.transition,
        "opacity 900ms ease 150ms, transform 900ms ease 150ms"
    );
}

#[test]
fn test_none_entrance_has_no_styles() {
    let value = AnimationValue::preset(EntrancePreset::None);
    assert!(get_entrance_animation_styles(&value).is_none());
    assert!(animation_value_to_css(&value).is_none());
    assert!(animation_value_to_css(&AnimationValue::default()).is_none());
}

#[test]
fn test_unknown_entrance_and_easing_fall_back() {
    let value: AnimationValue =
        serde_json::from_str(r#"{"entrance": "teleport", "easing": "wobbly"}"#).unwrap();
    assert_eq!(value.entrance(), EntrancePreset::None);
    assert_eq!(value.easing, Some(Easing::Ease));
}

#[test]
fn test_preset_easing_override() {
    let value = AnimationValue {
        easing: Some(Easing::Linear),
        ..AnimationValue::preset(EntrancePreset::BounceIn)
    };
    assert_eq!(value.effective_easing(), Easing::Bounce);
    let styles = get_entrance_animation_styles(&value).unwrap();
    assert!(
        styles
            .transition
            .contains("cubic-bezier(0.68, -0.55, 0.265, 1.55)")
    );

    let value = AnimationValue {
        easing: Some(Easing::Snappy),
        ..AnimationValue::preset(EntrancePreset::Fade)
    };
    assert_eq!(value.effective_easing(), Easing::Snappy);
}

#[test]
fn test_swing_in_pins_origin_to_top() {
    let value = AnimationValue {
        origin: Some(AnchorPosition::Bottom),
        ..AnimationValue::preset(EntrancePreset::SwingIn)
    };
    let styles = get_entrance_animation_styles(&value).unwrap();
    assert_eq!(styles.initial.get("transform-origin"), Some("top"));
    assert_eq!(
        styles.initial.get("transform"),
        Some("perspective(1000px) rotateX(-15deg)")
    );
    let css = animation_value_to_css(&value).unwrap();
    assert_eq!(css.get("transform-origin"), Some("top"));
}

#[test]
fn test_reveal_uses_clip_path_only() {
    let styles = get_entrance_animation_styles(&AnimationValue::preset(EntrancePreset::RevealUp))
        .unwrap();
    assert_eq!(
        styles.initial.to_string(),
        "clip-path: inset(100% 0% 0% 0%);"
    );
    assert!(!styles.initial.contains("opacity"));
    assert!(styles.transition.starts_with("clip-path "));
}

#[test]
fn test_custom_mode_transition() {
    let value = AnimationValue {
        mode: AnimationMode::Custom,
        duration: Some(250.0),
        delay: Some(50.0),
        easing: Some(Easing::EaseOut),
        entrance: Some(EntrancePreset::FadeUp),
        ..AnimationValue::default()
    };
    assert!(get_entrance_animation_styles(&value).is_none());
    assert_eq!(
        animation_value_to_css(&value).unwrap().to_string(),
        "transition: all 250ms ease-out 50ms;"
    );

    let defaults = AnimationValue {
        mode: AnimationMode::Custom,
        ..AnimationValue::default()
    };
    assert_eq!(
        animation_value_to_css(&defaults).unwrap().get("transition"),
        Some("all 300ms ease 0ms")
    );
}

#[test]
fn test_scroll_trigger_defaults() {
    let trigger = AnimationValue::preset(EntrancePreset::Fade)
        .scroll_trigger()
        .unwrap();
    assert!((trigger.threshold - 0.1).abs() < f64::EPSILON);
    assert!(trigger.once);
    assert_eq!(trigger.root_margin, "0px");

    let immediate = AnimationValue {
        trigger_on_scroll: Some(false),
        ..AnimationValue::preset(EntrancePreset::Fade)
    };
    assert!(immediate.scroll_trigger().is_none());
}

#[test]
fn test_stagger_forward_is_linear() {
    let config = stagger(StaggerDirection::Forward, None);
    for index in 0..6_u32 {
        let expected = f64::from(index) * 80.0;
        let actual = get_stagger_delay(index as usize, 6, &config);
        assert!((actual - expected).abs() < f64::EPSILON, "child {index}");
    }
}

#[test]
fn test_stagger_first_child_starts_immediately() {
    for direction in [StaggerDirection::Forward, StaggerDirection::Edges] {
        let delay = get_stagger_delay(0, 7, &stagger(direction, None));
        assert!(delay.abs() < f64::EPSILON, "{direction}");
    }
}

#[test]
fn test_stagger_reverse_starts_with_last_child() {
    let config = stagger(StaggerDirection::Reverse, None);
    assert!(get_stagger_delay(4, 5, &config).abs() < f64::EPSILON);
    assert!((get_stagger_delay(0, 5, &config) - 320.0).abs() < f64::EPSILON);
}

#[test]
fn test_stagger_center_delays_the_first_child() {
    let config = stagger(StaggerDirection::Center, None);
    assert!(get_stagger_delay(2, 5, &config).abs() < f64::EPSILON);
    assert!((get_stagger_delay(0, 5, &config) - 160.0).abs() < f64::EPSILON);
}

#[test]
fn test_stagger_is_capped_by_max_delay() {
    let config = stagger(StaggerDirection::Forward, Some(200.0));
    let delays: Vec<f64> = (0..6).map(|i| get_stagger_delay(i, 6, &config)).collect();
    assert!(delays.iter().all(|d| *d <= 200.0));
    assert!((delays[5] - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_stagger_disabled_or_single_child_is_zero() {
    let disabled = StaggerConfig::default();
    assert!(get_stagger_delay(3, 5, &disabled).abs() < f64::EPSILON);
    let enabled = stagger(StaggerDirection::Forward, None);
    assert!(get_stagger_delay(0, 1, &enabled).abs() < f64::EPSILON);
}

#[test]
fn test_child_styles_fold_in_stagger() {
    let value = AnimationValue {
        entrance_delay: Some(100.0),
        stagger: Some(stagger(StaggerDirection::Forward, None)),
        ..AnimationValue::preset(EntrancePreset::Fade)
    };
    let styles = get_child_entrance_styles(&value, 2, 4).unwrap();
    assert_eq!(styles.transition, "opacity 600ms ease 260ms");
}
