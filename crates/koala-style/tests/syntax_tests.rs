//! Tests for the declaration-value syntax: tokenizing, parsing and
//! `style` attribute splitting.

use koala_style::syntax::split_declarations;
use koala_style::{Component, CssValue, Separator, SyntaxError, ToCss, parse_value};

#[test]
fn test_shadow_list_structure() {
    let value = parse_value("1px 2px red, inset 0 0 0 black").unwrap();
    let CssValue::List { separator, items } = &value else {
        panic!("expected a comma list, got {value:?}");
    };
    assert_eq!(*separator, Separator::Comma);
    assert_eq!(items.len(), 2);

    assert_eq!(
        items[0],
        CssValue::whitespace_list(vec![
            CssValue::dimension(1.0, "px"),
            CssValue::dimension(2.0, "px"),
            CssValue::ident("red"),
        ])
    );
    assert_eq!(items[1].whitespace_items().len(), 5);
    assert!(items[1].whitespace_items()[0].is_ident("inset"));
}

#[test]
fn test_single_component_is_not_wrapped() {
    assert_eq!(parse_value("  none  "), Ok(CssValue::ident("none")));
    assert_eq!(parse_value("-2.5s"), Ok(CssValue::dimension(-2.5, "s")));
    assert_eq!(parse_value("50%"), Ok(CssValue::percentage(50.0)));
    assert_eq!(parse_value("#ff0000"), Ok(CssValue::hash("ff0000")));
}

#[test]
fn test_function_arguments_are_split_on_commas() {
    let value = parse_value("cubic-bezier(0.5, 0, 1, 1)").unwrap();
    let Some(Component::Function { name, arguments }) = value.as_component() else {
        panic!("expected a function, got {value:?}");
    };
    assert_eq!(name, "cubic-bezier");
    assert_eq!(arguments.len(), 4);
    assert_eq!(arguments[0], CssValue::number(0.5));
}

#[test]
fn test_slash_is_a_delimiter() {
    let value = parse_value("rgb(0 0 0 / 50%)").unwrap();
    let Some(Component::Function { arguments, .. }) = value.as_component() else {
        panic!("expected a function, got {value:?}");
    };
    assert_eq!(arguments.len(), 1);
    let parts = arguments[0].whitespace_items();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[3], CssValue::from(Component::Delim('/')));
}

#[test]
fn test_comments_are_dropped() {
    assert_eq!(
        parse_value("1s /* one second */, 2s"),
        Ok(CssValue::comma_list(vec![
            CssValue::dimension(1.0, "s"),
            CssValue::dimension(2.0, "s"),
        ]))
    );
}

#[test]
fn test_syntax_errors() {
    assert_eq!(parse_value(""), Err(SyntaxError::Empty));
    assert_eq!(parse_value("   "), Err(SyntaxError::Empty));
    assert_eq!(parse_value("1s,,2s"), Err(SyntaxError::EmptyListItem));
    assert_eq!(parse_value("steps(4"), Err(SyntaxError::Unclosed(')')));
    assert_eq!(parse_value("'open"), Err(SyntaxError::UnterminatedString));
    assert_eq!(parse_value("a { b }"), Err(SyntaxError::Unexpected('{')));
}

#[test]
fn test_values_serialize_back_to_css() {
    let value = parse_value("1px  2px   red,inset 0 0 0 black").unwrap();
    assert_eq!(value.to_css_string(), "1px 2px red, inset 0 0 0 black");
    assert_eq!(value.to_string(), value.to_css_string());

    let value = parse_value("steps( 4 , jump-end )").unwrap();
    assert_eq!(value.to_css_string(), "steps(4, jump-end)");
}

#[test]
fn test_split_style_attribute() {
    let declarations =
        split_declarations("color: red; background: url('a;b.png') ;; broken; : x; box-shadow:none");
    assert_eq!(
        declarations,
        vec![
            ("color", "red"),
            ("background", "url('a;b.png')"),
            ("box-shadow", "none"),
        ]
    );
}
