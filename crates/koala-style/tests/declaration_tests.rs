//! Tests for declaration blocks built from `style` attributes.

use koala_common::warning::{clear_warnings, warn_once};
use koala_style::property::longhands::{BoxShadow, TransitionDelay, Visibility};
use koala_style::{PropertyName, StyleDeclaration, Time, parse_value, types};

#[test]
fn test_style_attribute_skips_invalid_declarations() {
    let block = StyleDeclaration::from_style_attribute(
        "box-shadow: 1px 1px red; margin: 4px; transition-delay: fast; visibility: hidden",
    );
    assert_eq!(block.len(), 2);
    assert!(block.property(PropertyName::BoxShadow).is_some());
    assert!(block.property(PropertyName::TransitionDelay).is_none());
    assert_eq!(
        block.css_text(),
        "box-shadow: 1px 1px 0px rgb(255, 0, 0); visibility: hidden"
    );
}

#[test]
fn test_unknown_property_warns_once() {
    clear_warnings();
    let mut block = StyleDeclaration::new();
    assert!(!block.set_property_text("colour", "red"));
    assert!(!warn_once("CSS", "unknown property 'colour'"));
    assert!(block.is_empty());
}

#[test]
fn test_redeclaring_replaces_in_place() {
    let mut block = StyleDeclaration::new();
    assert!(block.set_property_text("transition-delay", "1s"));
    assert!(block.set_property_text("visibility", "collapse"));
    assert!(block.set_property_text("Transition-Delay", "2s, 3s"));

    assert_eq!(block.len(), 2);
    assert_eq!(
        block.css_text(),
        "transition-delay: 2s, 3s; visibility: collapse"
    );
}

#[test]
fn test_invalid_redeclaration_keeps_previous_value() {
    let mut block = StyleDeclaration::new();
    assert!(block.set_property_text("box-shadow", "2px 2px"));
    assert!(!block.set_property_text("box-shadow", "2px"));
    assert!(!block.set_property_text("box-shadow", "2px 2px,"));

    let shadow = block.get::<BoxShadow>().unwrap();
    assert_eq!(shadow.values().len(), 1);
}

#[test]
fn test_typed_access() {
    let block = StyleDeclaration::from_style_attribute("transition-delay: 150ms");
    let delay = block.get::<TransitionDelay>().unwrap();
    assert_eq!(delay.values(), [Time::from_milliseconds(150.0)]);
    assert!(block.get::<Visibility>().is_none());
}

#[test]
fn test_css_wide_keywords_in_blocks() {
    let mut block = StyleDeclaration::new();
    assert!(block.set_property_text("visibility", "inherit"));
    assert_eq!(block.css_text(), "visibility: inherit");

    let visibility = block.get::<Visibility>().unwrap();
    assert!(visibility.is_inherited());
    assert_eq!(visibility.values(), [types::Visibility::Visible]);

    assert!(block.set_property(PropertyName::Visibility.as_str(), &parse_value("hidden").unwrap()));
    assert_eq!(block.css_text(), "visibility: hidden");
}

#[test]
fn test_remove_property() {
    let mut block = StyleDeclaration::from_style_attribute("visibility: hidden; box-shadow: none");
    assert_eq!(block.css_text(), "visibility: hidden; box-shadow: none");

    assert!(block.remove_property(PropertyName::Visibility));
    assert!(!block.remove_property(PropertyName::Visibility));
    assert_eq!(block.css_text(), "box-shadow: none");

    let names: Vec<_> = block.iter().map(|property| property.name()).collect();
    assert_eq!(names, [PropertyName::BoxShadow]);
}

#[test]
fn test_empty_block() {
    let block = StyleDeclaration::from_style_attribute(" ; ;");
    assert!(block.is_empty());
    assert_eq!(block.css_text(), "");
}
