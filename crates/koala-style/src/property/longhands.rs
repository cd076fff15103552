//! Definitions of the supported longhands.
//!
//! Each definition composes its grammar from [`crate::grammar`] combinators
//! and [`converters`]. Names mirror the CSS property names.

use super::{PropertyDefinition, PropertyName};
use crate::error::GrammarError;
use crate::grammar::converters::{self, ShadowGrammar};
use crate::grammar::{BoxedGrammar, GrammarExt, convert, keywords, list_of, one_of};
use crate::types::{self, IterationCount, Shadow, Time, TimingFunction, TransitionTarget};
use crate::value::CssValue;

/// [CSS Backgrounds § 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// "Value: none | `<shadow>`#"
pub struct BoxShadow;

impl PropertyDefinition for BoxShadow {
    type Value = Shadow;
    const NAME: PropertyName = PropertyName::BoxShadow;
    const ANIMATABLE: bool = true;
    const INHERITED: bool = false;
    const NONE_WHEN_EMPTY: bool = true;

    fn initial_value() -> Vec<Shadow> {
        Vec::new()
    }

    fn grammar() -> BoxedGrammar<Vec<Shadow>> {
        one_of([("none", Vec::new())])
            .or(list_of(ShadowGrammar::BOX))
            .boxed()
    }
}

/// [CSS Text Decoration § 4 'text-shadow'](https://www.w3.org/TR/css-text-decor-3/#text-shadow-property)
///
/// "Value: none | [ `<color>`? && `<length>`{2,3} ]#"
pub struct TextShadow;

impl PropertyDefinition for TextShadow {
    type Value = Shadow;
    const NAME: PropertyName = PropertyName::TextShadow;
    const ANIMATABLE: bool = true;
    const INHERITED: bool = true;
    const NONE_WHEN_EMPTY: bool = true;

    fn initial_value() -> Vec<Shadow> {
        Vec::new()
    }

    fn grammar() -> BoxedGrammar<Vec<Shadow>> {
        one_of([("none", Vec::new())])
            .or(list_of(ShadowGrammar::TEXT))
            .boxed()
    }
}

/// Delay longhands: "Value: `<time>`#", "Initial: 0s". Negative delays are
/// allowed and start the timeline part-way through.
macro_rules! delay_property {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        pub struct $name;

        impl PropertyDefinition for $name {
            type Value = Time;
            const NAME: PropertyName = PropertyName::$name;
            const ANIMATABLE: bool = false;
            const INHERITED: bool = false;

            fn initial_value() -> Vec<Time> {
                vec![Time::ZERO]
            }

            fn grammar() -> BoxedGrammar<Vec<Time>> {
                list_of(convert(converters::time)).boxed()
            }
        }
    };
}

/// Duration longhands: "Value: `<time [0s,∞]>`#", "Initial: 0s".
macro_rules! duration_property {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        pub struct $name;

        impl PropertyDefinition for $name {
            type Value = Time;
            const NAME: PropertyName = PropertyName::$name;
            const ANIMATABLE: bool = false;
            const INHERITED: bool = false;

            fn initial_value() -> Vec<Time> {
                vec![Time::ZERO]
            }

            fn grammar() -> BoxedGrammar<Vec<Time>> {
                list_of(convert(converters::non_negative_time)).boxed()
            }
        }
    };
}

/// Timing function longhands: "Value: `<easing-function>`#", "Initial: ease".
macro_rules! timing_function_property {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        pub struct $name;

        impl PropertyDefinition for $name {
            type Value = TimingFunction;
            const NAME: PropertyName = PropertyName::$name;
            const ANIMATABLE: bool = false;
            const INHERITED: bool = false;

            fn initial_value() -> Vec<TimingFunction> {
                vec![TimingFunction::Ease]
            }

            fn grammar() -> BoxedGrammar<Vec<TimingFunction>> {
                list_of(convert(converters::timing_function)).boxed()
            }
        }
    };
}

delay_property!(
    TransitionDelay,
    "[CSS Transitions § 2.4 'transition-delay'](https://www.w3.org/TR/css-transitions-1/#transition-delay-property)"
);
delay_property!(
    AnimationDelay,
    "[CSS Animations § 3.8 'animation-delay'](https://www.w3.org/TR/css-animations-1/#animation-delay)"
);
duration_property!(
    TransitionDuration,
    "[CSS Transitions § 2.2 'transition-duration'](https://www.w3.org/TR/css-transitions-1/#transition-duration-property)"
);
duration_property!(
    AnimationDuration,
    "[CSS Animations § 3.3 'animation-duration'](https://www.w3.org/TR/css-animations-1/#animation-duration)"
);
timing_function_property!(
    TransitionTimingFunction,
    "[CSS Transitions § 2.3 'transition-timing-function'](https://www.w3.org/TR/css-transitions-1/#transition-timing-function-property)"
);
timing_function_property!(
    AnimationTimingFunction,
    "[CSS Animations § 3.4 'animation-timing-function'](https://www.w3.org/TR/css-animations-1/#animation-timing-function)"
);

/// [CSS Transitions § 2.1 'transition-property'](https://www.w3.org/TR/css-transitions-1/#transition-property-property)
///
/// "Value: none | `<single-transition-property>`#"
///
/// "The keyword none is excluded from the `<custom-ident>` above", so
/// `none` is only valid on its own.
pub struct TransitionProperty;

impl PropertyDefinition for TransitionProperty {
    type Value = TransitionTarget;
    const NAME: PropertyName = PropertyName::TransitionProperty;
    const ANIMATABLE: bool = false;
    const INHERITED: bool = false;
    const NONE_WHEN_EMPTY: bool = true;

    fn initial_value() -> Vec<TransitionTarget> {
        vec![TransitionTarget::All]
    }

    fn grammar() -> BoxedGrammar<Vec<TransitionTarget>> {
        let property_name = convert(|value: &CssValue| {
            if value.is_ident("none") {
                return Err(GrammarError::mismatch("<custom-ident> other than `none`"));
            }
            converters::custom_ident(value)
        });
        let single = one_of([("all", TransitionTarget::All)])
            .or(property_name.map(TransitionTarget::Property));
        one_of([("none", Vec::new())])
            .or(list_of(single))
            .boxed()
    }
}

/// [CSS Animations § 3.6 'animation-iteration-count'](https://www.w3.org/TR/css-animations-1/#animation-iteration-count)
///
/// "Value: `<single-animation-iteration-count>`#", "Initial: 1"
pub struct AnimationIterationCount;

impl PropertyDefinition for AnimationIterationCount {
    type Value = IterationCount;
    const NAME: PropertyName = PropertyName::AnimationIterationCount;
    const ANIMATABLE: bool = false;
    const INHERITED: bool = false;

    fn initial_value() -> Vec<IterationCount> {
        vec![IterationCount::Count(1.0)]
    }

    fn grammar() -> BoxedGrammar<Vec<IterationCount>> {
        list_of(
            one_of([("infinite", IterationCount::Infinite)])
                .or(convert(converters::non_negative_number).map(IterationCount::Count)),
        )
        .boxed()
    }
}

/// [CSS Animations § 3.7 'animation-direction'](https://www.w3.org/TR/css-animations-1/#animation-direction)
///
/// "Value: `<single-animation-direction>`#", "Initial: normal"
pub struct AnimationDirection;

impl PropertyDefinition for AnimationDirection {
    type Value = types::AnimationDirection;
    const NAME: PropertyName = PropertyName::AnimationDirection;
    const ANIMATABLE: bool = false;
    const INHERITED: bool = false;

    fn initial_value() -> Vec<types::AnimationDirection> {
        vec![types::AnimationDirection::Normal]
    }

    fn grammar() -> BoxedGrammar<Vec<types::AnimationDirection>> {
        list_of(keywords::<types::AnimationDirection>()).boxed()
    }
}

/// [CSS Display § 4 'visibility'](https://www.w3.org/TR/css-display-3/#visibility)
///
/// "Value: visible | hidden | collapse", "Initial: visible",
/// "Inherited: yes". A single value, held as a one-item list.
pub struct Visibility;

impl PropertyDefinition for Visibility {
    type Value = types::Visibility;
    const NAME: PropertyName = PropertyName::Visibility;
    const ANIMATABLE: bool = true;
    const INHERITED: bool = true;

    fn initial_value() -> Vec<types::Visibility> {
        vec![types::Visibility::Visible]
    }

    fn grammar() -> BoxedGrammar<Vec<types::Visibility>> {
        keywords::<types::Visibility>()
            .map(|visibility| vec![visibility])
            .boxed()
    }
}
