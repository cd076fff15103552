//! Tests for typed properties: validation, reset, CSS-wide keywords and
//! serialization.

use koala_style::property::longhands::{
    AnimationDirection, AnimationDuration, AnimationIterationCount, BoxShadow, TextShadow,
    TransitionDelay, TransitionDuration, TransitionProperty, TransitionTimingFunction, Visibility,
};
use koala_style::{
    Color, CssProperty, CssValue, GrammarError, IterationCount, Length, Property, PropertyName,
    Rgba, Shadow, StepPosition, Time, TimingFunction, TransitionTarget, parse_value, types,
};
use strum::IntoEnumIterator;

fn value(text: &str) -> CssValue {
    parse_value(text).unwrap()
}

#[test]
fn test_shadow_list_keeps_order() {
    let mut shadow = Property::<BoxShadow>::new();
    assert!(shadow.is_valid(&value("1px 2px 3px 4px red, inset 0 0 0 black")));

    let values = shadow.values();
    assert_eq!(values.len(), 2);

    assert_eq!(values[0].offset_x, Length::px(1.0));
    assert_eq!(values[0].offset_y, Length::px(2.0));
    assert_eq!(values[0].blur_radius, Length::px(3.0));
    assert_eq!(values[0].spread_radius, Length::px(4.0));
    assert_eq!(values[0].color, Color::Rgba(Rgba::opaque(255, 0, 0)));
    assert!(!values[0].inset);

    assert_eq!(values[1].offset_x, Length::ZERO);
    assert_eq!(values[1].color, Color::Rgba(Rgba::BLACK));
    assert!(values[1].inset);
}

#[test]
fn test_none_clears_shadows() {
    let mut shadow = Property::<BoxShadow>::new();
    assert!(shadow.is_valid(&value("1px 1px")));
    assert_eq!(shadow.values().len(), 1);

    assert!(shadow.is_valid(&value("none")));
    assert!(shadow.values().is_empty());
    assert_eq!(shadow.css_text(), "none");
}

#[test]
fn test_reset_restores_single_zero_delay() {
    let mut delay = Property::<TransitionDelay>::new();
    assert!(delay.is_valid(&value("1s, 2s, 3s")));
    assert_eq!(delay.values().len(), 3);

    delay.reset();
    assert_eq!(delay.values(), [Time::ZERO]);
    assert_eq!(delay.values()[0].milliseconds, 0.0);
}

#[test]
fn test_failed_validation_leaves_values_untouched() {
    let mut shadow = Property::<BoxShadow>::new();
    assert!(shadow.is_valid(&value("2px 2px blue")));
    let before = shadow.values().to_vec();

    assert!(!shadow.is_valid(&value("not-a-shadow-at-all")));
    assert_eq!(shadow.values(), before.as_slice());

    // A list where only the last item is bad is rejected as a whole.
    assert!(!shadow.is_valid(&value("1px 1px, 2px 2px, nonsense")));
    assert_eq!(shadow.values(), before.as_slice());
}

#[test]
fn test_validate_reports_reason() {
    let mut duration = Property::<TransitionDuration>::new();
    let error = duration.validate(&value("1s, -2s")).unwrap_err();
    assert!(matches!(error, GrammarError::InvalidListItem { index: 1, .. }));
    assert!(error.is_range_or_unit());
    assert_eq!(duration.values(), [Time::ZERO]);

    let error = duration.validate(&value("fast")).unwrap_err();
    assert!(!error.is_range_or_unit());
}

#[test]
fn test_reset_is_idempotent() {
    let mut timing = Property::<TransitionTimingFunction>::new();
    assert!(timing.is_valid(&value("steps(3), linear")));
    timing.reset();
    let once = timing.values().to_vec();
    timing.reset();
    assert_eq!(timing.values(), once.as_slice());
    assert_eq!(once, vec![TimingFunction::Ease]);
}

#[test]
fn test_initial_values() {
    assert!(Property::<BoxShadow>::new().values().is_empty());
    assert!(Property::<TextShadow>::new().values().is_empty());
    assert_eq!(Property::<AnimationDuration>::new().values(), [Time::ZERO]);
    assert_eq!(
        Property::<TransitionProperty>::new().values(),
        [TransitionTarget::All]
    );
    assert_eq!(
        Property::<AnimationIterationCount>::new().values(),
        [IterationCount::Count(1.0)]
    );
    assert_eq!(
        Property::<AnimationDirection>::new().values(),
        [types::AnimationDirection::Normal]
    );
    assert_eq!(
        Property::<Visibility>::new().values(),
        [types::Visibility::Visible]
    );
}

#[test]
fn test_animatable_and_inherited_flags() {
    assert!(Property::<BoxShadow>::new().is_animatable());
    assert!(Property::<Visibility>::new().is_animatable());
    assert!(!Property::<TransitionDelay>::new().is_animatable());

    let boxed = PropertyName::TextShadow.create();
    assert_eq!(boxed.name(), PropertyName::TextShadow);
    assert!(boxed.is_animatable());
}

#[test]
fn test_transition_property_names() {
    let mut property = Property::<TransitionProperty>::new();
    assert!(property.is_valid(&value("opacity, all, --custom")));
    assert_eq!(
        property.values(),
        [
            TransitionTarget::Property("opacity".into()),
            TransitionTarget::All,
            TransitionTarget::Property("--custom".into()),
        ]
    );

    assert!(property.is_valid(&value("none")));
    assert!(property.values().is_empty());
    assert_eq!(property.css_text(), "none");

    assert!(!property.is_valid(&value("opacity, none")));
    assert!(!property.is_valid(&value("opacity, 3px")));
    assert!(!property.is_valid(&value("default")));
}

#[test]
fn test_iteration_count() {
    let mut count = Property::<AnimationIterationCount>::new();
    assert!(count.is_valid(&value("infinite, 2.5, 0")));
    assert_eq!(
        count.values(),
        [
            IterationCount::Infinite,
            IterationCount::Count(2.5),
            IterationCount::Count(0.0),
        ]
    );
    assert_eq!(count.css_text(), "infinite, 2.5, 0");
    assert!(!count.is_valid(&value("-1")));
    assert!(!count.is_valid(&value("forever")));
}

#[test]
fn test_keyword_properties() {
    let mut direction = Property::<AnimationDirection>::new();
    assert!(direction.is_valid(&value("reverse, Alternate-Reverse")));
    assert_eq!(
        direction.values(),
        [
            types::AnimationDirection::Reverse,
            types::AnimationDirection::AlternateReverse,
        ]
    );
    assert_eq!(direction.css_text(), "reverse, alternate-reverse");

    let mut visibility = Property::<Visibility>::new();
    assert!(visibility.is_valid(&value("HIDDEN")));
    assert_eq!(visibility.values(), [types::Visibility::Hidden]);
    assert!(!visibility.is_valid(&value("hidden, visible")));
    assert!(!visibility.is_valid(&value("invisible")));
    assert_eq!(visibility.css_text(), "hidden");
}

#[test]
fn test_negative_delay_is_allowed_but_negative_duration_is_not() {
    let mut delay = Property::<TransitionDelay>::new();
    assert!(delay.is_valid(&value("-500ms")));
    assert_eq!(delay.values(), [Time::from_milliseconds(-500.0)]);
    assert_eq!(delay.css_text(), "-0.5s");

    let mut duration = Property::<TransitionDuration>::new();
    assert!(!duration.is_valid(&value("-500ms")));
}

#[test]
fn test_values_too_large_for_f32_are_rejected() {
    let mut duration = Property::<TransitionDuration>::new();
    assert!(duration.is_valid(&value("2s")));
    let error = duration.validate(&value("1e39s")).unwrap_err();
    assert!(error.is_range_or_unit());
    assert!(!duration.is_valid(&value("1e38s")));
    assert!(!duration.is_valid(&value("1e39ms")));
    assert_eq!(duration.css_text(), "2s");

    let mut shadow = Property::<BoxShadow>::new();
    assert!(!shadow.is_valid(&value("1e39px 1px")));
    assert!(!shadow.is_valid(&value("1px 1px 1e39px red")));
    assert!(shadow.values().is_empty());

    let mut count = Property::<AnimationIterationCount>::new();
    assert!(!count.is_valid(&value("1e39")));
    assert_eq!(count.css_text(), "1");
}

#[test]
fn test_css_wide_keywords() {
    let mut visibility = Property::<Visibility>::new();
    assert!(visibility.is_valid(&value("hidden")));

    // visibility is inherited, so `unset` behaves as `inherit`.
    assert!(visibility.try_set(&value("unset")));
    assert!(visibility.is_inherited());
    assert_eq!(visibility.css_text(), "inherit");

    assert!(visibility.try_set(&value("initial")));
    assert!(!visibility.is_inherited());
    assert_eq!(visibility.values(), [types::Visibility::Visible]);

    let mut delay = Property::<TransitionDelay>::new();
    assert!(delay.try_set(&value("2s")));
    assert!(delay.try_set(&value("UNSET")));
    assert!(!delay.is_inherited());
    assert_eq!(delay.values(), [Time::ZERO]);

    assert!(delay.try_set(&value("inherit")));
    assert!(delay.is_inherited());
    assert!(delay.try_set(&value("1s")));
    assert!(!delay.is_inherited());
    assert_eq!(delay.css_text(), "1s");

    // Keywords are never handed to the grammar.
    assert!(!delay.is_valid(&value("inherit")));
}

#[test]
fn test_timing_function_serialization() {
    let mut timing = Property::<TransitionTimingFunction>::new();
    assert!(timing.is_valid(&value(
        "ease-in, cubic-bezier(0.1, 0.7, 1, 0.1), steps(4, jump-end), steps(2, start)"
    )));
    assert_eq!(timing.values()[2], TimingFunction::Steps {
        count: 4,
        position: StepPosition::JumpEnd,
    });
    assert_eq!(
        timing.css_text(),
        "ease-in, cubic-bezier(0.1, 0.7, 1, 0.1), steps(4), steps(2, start)"
    );
}

#[test]
fn test_text_shadow_serialization() {
    let mut shadow = Property::<TextShadow>::new();
    assert!(shadow.is_valid(&value("red 1px 1px, 0 0 4px #00f")));
    assert_eq!(
        shadow.css_text(),
        "1px 1px 0px rgb(255, 0, 0), 0px 0px 4px rgb(0, 0, 255)"
    );
    assert_eq!(shadow.values()[0], {
        let mut expected = Shadow::new(Length::px(1.0), Length::px(1.0));
        expected.color = Color::Rgba(Rgba::opaque(255, 0, 0));
        expected
    });
}

#[test]
fn test_values_json() {
    let mut delay = PropertyName::TransitionDelay.create();
    assert!(delay.try_set(&value("1s, 20ms")));
    let json = delay.values_json().unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "milliseconds": 1000.0 }, { "milliseconds": 20.0 }])
    );

    let mut visibility = PropertyName::Visibility.create();
    assert!(visibility.try_set(&value("collapse")));
    assert_eq!(visibility.values_json().unwrap(), serde_json::json!(["collapse"]));
}

#[test]
fn test_every_property_resets_to_its_serialized_initial_value() {
    for name in PropertyName::iter() {
        let mut property: Box<dyn CssProperty> = name.create();
        let initial = property.css_text();
        property.reset();
        assert_eq!(property.css_text(), initial, "{name}");
        assert!(property.try_set(&value("initial")), "{name}");
        assert_eq!(property.css_text(), initial, "{name}");
    }
}

#[test]
fn test_clone_keeps_values() {
    let mut original = Property::<AnimationDirection>::new();
    assert!(original.is_valid(&value("alternate")));
    let mut copy = original.clone();
    assert_eq!(copy.values(), original.values());
    assert!(copy.is_valid(&value("reverse")));
    assert_eq!(original.values(), [types::AnimationDirection::Alternate]);
}
