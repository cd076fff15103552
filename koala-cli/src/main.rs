//! Koala style CLI
//!
//! Validates property values and inspects selectors from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use koala_style::{PropertyName, StyleDeclaration, ToCss, parse_selector_list, parse_value};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Check CSS values and selectors against the Koala style engine.
#[derive(Parser)]
#[command(name = "koala-style", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a value for one property and print what it converts to.
    Value {
        /// Property name, e.g. `box-shadow`.
        property: String,
        /// Declaration value, e.g. `1px 2px red, inset 0 0 4px blue`.
        value: String,
        /// Print the typed values as JSON instead of CSS text.
        #[arg(long)]
        json: bool,
    },
    /// Parse a `style` attribute and print the declarations that survive.
    Style {
        /// Attribute text, e.g. `visibility: hidden; transition-delay: 1s`.
        text: String,
    },
    /// Parse a selector list and print its members with their specificity.
    Selector {
        /// Selector text, e.g. `ul#nav > li:first-child`.
        selector: String,
    },
    /// List the supported properties.
    Properties,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Value {
            property,
            value,
            json,
        } => check_value(&property, &value, json),
        Command::Style { text } => {
            let block = StyleDeclaration::from_style_attribute(&text);
            println!("{}", block.css_text());
            Ok(())
        }
        Command::Selector { selector } => {
            inspect_selector(&selector);
            Ok(())
        }
        Command::Properties => {
            list_properties();
            Ok(())
        }
    }
}

fn check_value(property: &str, text: &str, json: bool) -> Result<()> {
    let name: PropertyName = property
        .parse()
        .with_context(|| format!("unknown property '{property}'"))?;
    let value = parse_value(text).with_context(|| format!("cannot parse '{text}'"))?;

    let mut instance = name.create();
    if let Err(error) = instance.validate(&value) {
        let class = if error.is_range_or_unit() {
            "range or unit violation"
        } else {
            "grammar mismatch"
        };
        bail!("invalid value for {name} ({class}): {error}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&instance.values_json()?)?);
    } else {
        println!("{}: {}", name.green(), instance.css_text());
    }
    Ok(())
}

fn inspect_selector(text: &str) {
    let list = parse_selector_list(text);
    if list.is_unknown() {
        println!("{} {}", "unknown:".red(), list.to_css_string());
        return;
    }
    for selector in list.selectors() {
        println!(
            "{}  {}",
            selector.specificity().to_string().cyan(),
            selector.to_css_string()
        );
    }
}

fn list_properties() {
    for name in PropertyName::iter() {
        let property = name.create();
        let mut flags = Vec::new();
        if property.is_animatable() {
            flags.push("animatable");
        }
        if property.inherits() {
            flags.push("inherited");
        }
        println!(
            "{:<28} {:<40} {}",
            name.as_str().bold(),
            property.css_text(),
            flags.join(", ").dimmed()
        );
    }
}
