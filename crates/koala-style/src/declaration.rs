//! Declaration blocks.
//!
//! [CSSOM § 6.6 CSS Declaration Blocks](https://www.w3.org/TR/cssom-1/#css-declaration-blocks)

use koala_common::warning::warn_once;

use crate::property::{CssProperty, Property, PropertyDefinition, PropertyName};
use crate::syntax::{parse_value, split_declarations};
use crate::value::CssValue;

/// "A CSS declaration block is an ordered collection of CSS properties with
/// their associated values."
///
/// Properties are kept in the order they were first declared. Setting a
/// property again replaces its value in place.
#[derive(Debug, Default)]
pub struct StyleDeclaration {
    properties: Vec<Box<dyn CssProperty>>,
}

impl StyleDeclaration {
    /// An empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text of a `style` attribute. Unknown properties and invalid
    /// values are skipped.
    ///
    /// ```
    /// use koala_style::StyleDeclaration;
    ///
    /// let block = StyleDeclaration::from_style_attribute(
    ///     "visibility: hidden; transition-delay: 0; transition-duration: 2s",
    /// );
    /// assert_eq!(block.css_text(), "visibility: hidden; transition-duration: 2s");
    /// ```
    #[must_use]
    pub fn from_style_attribute(text: &str) -> Self {
        let mut block = Self::new();
        for (name, value) in split_declarations(text) {
            let _ = block.set_property_text(name, value);
        }
        block
    }

    /// [CSSOM § 6.6.1 setProperty()](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-setproperty)
    ///
    /// Validate `value` for the property called `name` and store it.
    /// Returns false, leaving the block unchanged, if the name is unknown or
    /// the value is invalid.
    pub fn set_property(&mut self, name: &str, value: &CssValue) -> bool {
        let Ok(property_name) = name.parse::<PropertyName>() else {
            let _ = warn_once("CSS", &format!("unknown property '{name}'"));
            return false;
        };

        if let Some(existing) = self.find_mut(property_name) {
            return existing.try_set(value);
        }

        let mut property = property_name.create();
        if !property.try_set(value) {
            return false;
        }
        self.properties.push(property);
        true
    }

    /// [`set_property`](Self::set_property) with the value given as text.
    pub fn set_property_text(&mut self, name: &str, value: &str) -> bool {
        match parse_value(value) {
            Ok(value) => self.set_property(name, &value),
            Err(_) => false,
        }
    }

    /// The property called `name`, if declared.
    #[must_use]
    pub fn property(&self, name: PropertyName) -> Option<&dyn CssProperty> {
        self.properties
            .iter()
            .find(|property| property.name() == name)
            .map(AsRef::as_ref)
    }

    /// Typed access to a declared property.
    ///
    /// ```
    /// use koala_style::property::longhands::Visibility;
    /// use koala_style::{StyleDeclaration, Visibility as Value};
    ///
    /// let block = StyleDeclaration::from_style_attribute("visibility: collapse");
    /// let visibility = block.get::<Visibility>().unwrap();
    /// assert_eq!(visibility.values(), [Value::Collapse]);
    /// ```
    #[must_use]
    pub fn get<D: PropertyDefinition>(&self) -> Option<&Property<D>> {
        self.property(D::NAME)
            .and_then(|property| property.as_any().downcast_ref())
    }

    /// [CSSOM § 6.6.1 removeProperty()](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-removeproperty)
    ///
    /// Returns true if the property was declared.
    pub fn remove_property(&mut self, name: PropertyName) -> bool {
        let before = self.properties.len();
        self.properties.retain(|property| property.name() != name);
        self.properties.len() != before
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Declared properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CssProperty> {
        self.properties.iter().map(AsRef::as_ref)
    }

    /// [CSSOM § 6.7.1 Serializing a CSS declaration block](https://www.w3.org/TR/cssom-1/#serialize-a-css-declaration-block)
    ///
    /// `name: value` pairs joined by `"; "`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.iter()
            .map(|property| format!("{}: {}", property.name(), property.css_text()))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn find_mut(&mut self, name: PropertyName) -> Option<&mut Box<dyn CssProperty>> {
        self.properties
            .iter_mut()
            .find(|property| property.name() == name)
    }
}
