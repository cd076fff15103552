//! Tests for selector parsing, specificity, serialization and matching
//! against a DOM tree.

use koala_common::warning::{clear_warnings, warn_once};
use koala_dom::{DomTree, ElementData, ElementRef, NodeId};
use koala_style::error::SelectorError;
use koala_style::{
    Selector, SelectorList, Specificity, ToCss, parse_selector, parse_selector_list,
    try_parse_selector,
};

/// Node ids of the interesting elements in [`document`].
struct Nodes {
    html: NodeId,
    ul: NodeId,
    items: [NodeId; 3],
    link: NodeId,
    empty_p: NodeId,
    checkbox: NodeId,
    text_input: NodeId,
    option: NodeId,
    span: NodeId,
}

/// ```html
/// <html><body>
///   <ul id="nav">
///     <li class="item first">One</li>
///     <li class="item">Two <a href="/two">more</a></li>
///     <li class="item last" data-state="Open" lang="en-US">Three</li>
///   </ul>
///   <p></p>
///   <form>
///     <input type="checkbox" checked disabled>
///     <input type="text">
///     <select><option selected></option></select>
///   </form>
///   <div class="outer"><p class="x"><section><p class="y"><span></span></p></section></p></div>
/// </body></html>
/// ```
fn document(tree: &mut DomTree) -> Nodes {
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = tree.append_element(html, ElementData::new("body"));

    let ul = tree.append_element(body, ElementData::new("ul").with_attr("id", "nav"));
    let first = tree.append_element(ul, ElementData::new("li").with_attr("class", "item first"));
    let _ = tree.append_text(first, "One");
    let second = tree.append_element(ul, ElementData::new("li").with_attr("class", "item"));
    let _ = tree.append_text(second, "Two ");
    let link = tree.append_element(second, ElementData::new("a").with_attr("href", "/two"));
    let _ = tree.append_text(link, "more");
    let third = tree.append_element(
        ul,
        ElementData::new("LI")
            .with_attr("class", "item last")
            .with_attr("data-state", "Open")
            .with_attr("lang", "en-US"),
    );
    let _ = tree.append_text(third, "Three");

    let empty_p = tree.append_element(body, ElementData::new("p"));

    let form = tree.append_element(body, ElementData::new("form"));
    let checkbox = tree.append_element(
        form,
        ElementData::new("input")
            .with_attr("type", "checkbox")
            .with_attr("checked", "")
            .with_attr("disabled", ""),
    );
    let text_input = tree.append_element(form, ElementData::new("input").with_attr("type", "text"));
    let select = tree.append_element(form, ElementData::new("select"));
    let option = tree.append_element(select, ElementData::new("option").with_attr("selected", ""));

    let outer = tree.append_element(body, ElementData::new("div").with_attr("class", "outer"));
    let p_x = tree.append_element(outer, ElementData::new("p").with_attr("class", "x"));
    let section = tree.append_element(p_x, ElementData::new("section"));
    let p_y = tree.append_element(section, ElementData::new("p").with_attr("class", "y"));
    let span = tree.append_element(p_y, ElementData::new("span"));

    Nodes {
        html,
        ul,
        items: [first, second, third],
        link,
        empty_p,
        checkbox,
        text_input,
        option,
        span,
    }
}

fn element(tree: &DomTree, id: NodeId) -> ElementRef<'_> {
    tree.element(id).unwrap()
}

fn matches(tree: &DomTree, selector: &str, id: NodeId) -> bool {
    let selector = try_parse_selector(selector).unwrap();
    selector.matches(&element(tree, id))
}

#[test]
fn test_specificity_of_simple_selectors() {
    let cases = [
        ("*", (0, 0, 0)),
        ("li", (0, 0, 1)),
        (".item", (0, 1, 0)),
        ("#nav", (1, 0, 0)),
        ("[href]", (0, 1, 0)),
        (":hover", (0, 1, 0)),
        ("::before", (0, 0, 1)),
        ("p:first-line", (0, 0, 2)),
    ];
    for (text, (a, b, c)) in cases {
        assert_eq!(parse_selector(text).specificity(), Specificity::new(a, b, c), "{text}");
    }
}

#[test]
fn test_specificity_sums_compound_and_complex_parts() {
    let cases = [
        ("ul#nav > li.item:first-child", (1, 2, 2)),
        ("ul li.item:nth-child(2n+1)", (0, 2, 2)),
        ("*.a.b[c]", (0, 3, 0)),
        ("div p + span ~ em", (0, 0, 4)),
        ("#a#b", (2, 0, 0)),
    ];
    for (text, (a, b, c)) in cases {
        assert_eq!(parse_selector(text).specificity(), Specificity::new(a, b, c), "{text}");
    }
}

#[test]
fn test_specificity_of_logical_pseudo_classes() {
    assert_eq!(parse_selector(":not(#a, .b)").specificity(), Specificity::new(1, 0, 0));
    assert_eq!(parse_selector(":is(p, .x)").specificity(), Specificity::new(0, 1, 0));
    assert_eq!(parse_selector("p:where(#a .b)").specificity(), Specificity::new(0, 0, 1));
}

#[test]
fn test_specificity_orders_lexicographically() {
    assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 10, 10));
    assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 5));
    assert!(Specificity::new(0, 1, 2) < Specificity::new(0, 1, 3));
    assert_eq!(
        Specificity::new(1, 2, 3) + Specificity::new(0, 1, 0),
        Specificity::new(1, 3, 3)
    );
    assert_eq!(Specificity::new(1, 2, 3).to_string(), "(1, 2, 3)");
}

#[test]
fn test_serialization_is_normalized() {
    let cases = [
        ("a>b", "a > b"),
        ("A.Foo", "a.Foo"),
        ("a   ~ b+c", "a ~ b + c"),
        ("[type=text]", "[type=\"text\"]"),
        ("[lang|='en' I]", "[lang|=\"en\" i]"),
        ("li:NTH-CHILD( 2n + 1 )", "li:nth-child(2n+1)"),
        ("li:nth-of-type(odd)", "li:nth-of-type(2n+1)"),
        ("p:before", "p::before"),
        (":not(a,b)", ":not(a, b)"),
        (":Hover", ":hover"),
        (".a\\:b", ".a\\:b"),
        ("#\\31 23", "#\\31 23"),
    ];
    for (input, expected) in cases {
        let selector = try_parse_selector(input).unwrap();
        assert_eq!(selector.to_css_string(), expected, "{input}");
        assert_eq!(try_parse_selector(expected), Ok(selector), "{expected}");
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(try_parse_selector("a, b"), Err(SelectorError::UnexpectedList));
    assert_eq!(try_parse_selector(""), Err(SelectorError::Empty));
    assert_eq!(
        try_parse_selector("::bogus"),
        Err(SelectorError::UnknownPseudoElement("bogus".into()))
    );
    assert_eq!(
        try_parse_selector(":marker"),
        Err(SelectorError::UnknownPseudoClass("marker".into()))
    );
    assert_eq!(
        try_parse_selector(":nth-child(x)"),
        Err(SelectorError::InvalidNth("x".into()))
    );
    assert_eq!(
        try_parse_selector(":has(p)"),
        Err(SelectorError::UnknownPseudoClass("has()".into()))
    );
    assert_eq!(
        try_parse_selector("li::before:hover"),
        Err(SelectorError::PseudoElementNotLast)
    );
    assert_eq!(
        try_parse_selector("li::before > a"),
        Err(SelectorError::PseudoElementNotLast)
    );
    assert_eq!(
        try_parse_selector(":not(::before)"),
        Err(SelectorError::PseudoElementNotLast)
    );
    assert_eq!(try_parse_selector("a!"), Err(SelectorError::UnexpectedChar('!')));
}

#[test]
fn test_unknown_selector_round_trips_and_never_matches() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);

    let unknown = parse_selector("li:bogus");
    assert!(unknown.is_unknown());
    assert_eq!(unknown, Selector::Unknown(Some("li:bogus".into())));
    assert_eq!(unknown.to_css_string(), "li:bogus");
    assert_eq!(unknown.specificity(), Specificity::default());
    assert!(unknown.subject().is_empty());
    for id in nodes.items {
        assert!(!unknown.matches(&element(&tree, id)));
    }

    let empty = parse_selector("");
    assert_eq!(empty, Selector::Unknown(None));
    assert_eq!(empty.to_css_string(), "");
}

#[test]
fn test_unknown_selector_keeps_surrounding_whitespace() {
    let padded = parse_selector("  a!  ");
    assert_eq!(padded, Selector::Unknown(Some("  a!  ".into())));
    assert_eq!(padded.to_css_string(), "  a!  ");

    let blank = parse_selector("   ");
    assert_eq!(blank.to_css_string(), "   ");
    assert_eq!(blank.specificity(), Specificity::default());

    let list = parse_selector_list(" ul, li:bogus ");
    assert!(list.is_unknown());
    assert_eq!(list.to_css_string(), " ul, li:bogus ");
}

#[test]
fn test_unknown_selector_is_reported_once() {
    clear_warnings();
    let _ = parse_selector("p:bogus");
    let _ = parse_selector("p:bogus");
    assert!(!warn_once(
        "CSS",
        "unsupported selector 'p:bogus': unknown pseudo-class `:bogus`"
    ));
}

#[test]
fn test_type_class_id_and_universal() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let [first, second, third] = nodes.items;

    assert!(matches(&tree, "li", third));
    assert!(matches(&tree, "LI", first));
    assert!(matches(&tree, "*", nodes.ul));
    assert!(matches(&tree, ".item.first", first));
    assert!(!matches(&tree, ".item.first", second));
    assert!(!matches(&tree, ".ITEM", first));
    assert!(matches(&tree, "ul#nav", nodes.ul));
    assert!(!matches(&tree, "ol#nav", nodes.ul));
    assert!(!matches(&tree, "#NAV", nodes.ul));
}

#[test]
fn test_attribute_operators() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let third = nodes.items[2];

    assert!(matches(&tree, "[data-state]", third));
    assert!(matches(&tree, "[DATA-STATE]", third));
    assert!(matches(&tree, "[data-state=Open]", third));
    assert!(!matches(&tree, "[data-state=open]", third));
    assert!(matches(&tree, "[data-state=open i]", third));
    assert!(matches(&tree, "[class~=last]", third));
    assert!(!matches(&tree, "[class~=\"item last\"]", third));
    assert!(!matches(&tree, "[class~=\"\"]", third));
    assert!(matches(&tree, "[lang|=en]", third));
    assert!(!matches(&tree, "[lang|=en-U]", third));
    assert!(matches(&tree, "[href^='/t']", nodes.link));
    assert!(matches(&tree, "[href$=wo]", nodes.link));
    assert!(matches(&tree, "[href*=\"tw\"]", nodes.link));
    assert!(!matches(&tree, "[href^='']", nodes.link));
    assert!(!matches(&tree, "[title]", nodes.link));
}

#[test]
fn test_combinators() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let [first, second, third] = nodes.items;

    assert!(matches(&tree, "html li", first));
    assert!(matches(&tree, "ul > li", second));
    assert!(!matches(&tree, "body > li", second));
    assert!(matches(&tree, "ul a", nodes.link));
    assert!(!matches(&tree, "ul > a", nodes.link));
    assert!(matches(&tree, ".first + li", second));
    assert!(!matches(&tree, ".first + li", third));
    assert!(matches(&tree, ".first ~ li", third));
    assert!(!matches(&tree, ".last ~ li", first));
    assert!(matches(&tree, "ul ~ form input", nodes.text_input));
}

#[test]
fn test_descendant_matching_backtracks() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);

    // The nearest `p` ancestor of the span is inside a section, but an
    // outer `p` is a child of the div.
    assert!(matches(&tree, "div > p span", nodes.span));
    assert!(matches(&tree, "div > p section p > span", nodes.span));
    assert!(!matches(&tree, "div > section span", nodes.span));
    assert!(matches(&tree, ".outer p.x p.y span", nodes.span));
    assert!(!matches(&tree, ".y p span", nodes.span));
}

#[test]
fn test_structural_pseudo_classes() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let [first, second, third] = nodes.items;

    assert!(matches(&tree, ":root", nodes.html));
    assert!(!matches(&tree, ":root", nodes.ul));
    assert!(matches(&tree, "p:empty", nodes.empty_p));
    assert!(!matches(&tree, "li:empty", first));
    assert!(matches(&tree, "li:first-child", first));
    assert!(!matches(&tree, "li:first-child", second));
    assert!(matches(&tree, "li:last-child", third));
    assert!(matches(&tree, "a:only-child", nodes.link));
    assert!(matches(&tree, "p:first-of-type", nodes.empty_p));
    assert!(matches(&tree, "input:last-of-type", nodes.text_input));
    assert!(!matches(&tree, "input:only-of-type", nodes.text_input));
    assert!(matches(&tree, "li:nth-child(odd)", third));
    assert!(!matches(&tree, "li:nth-child(odd)", second));
    assert!(matches(&tree, "li:nth-child(2)", second));
    assert!(matches(&tree, "li:nth-last-child(1)", third));
    assert!(matches(&tree, "li:nth-child(-n+2)", first));
    assert!(!matches(&tree, "li:nth-child(-n+2)", third));
    assert!(matches(&tree, "input:nth-of-type(2)", nodes.text_input));
    assert!(matches(&tree, "input:nth-last-of-type(2)", nodes.checkbox));
}

#[test]
fn test_document_element_needs_no_parent_element() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    assert!(matches(&tree, "html:first-child", nodes.html));
    assert!(matches(&tree, "html:only-child", nodes.html));
}

#[test]
fn test_link_and_form_pseudo_classes() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);

    assert!(matches(&tree, "a:link", nodes.link));
    assert!(matches(&tree, ":any-link", nodes.link));
    assert!(!matches(&tree, ":link", nodes.items[1]));
    assert!(matches(&tree, ":checked", nodes.checkbox));
    assert!(matches(&tree, ":checked", nodes.option));
    assert!(!matches(&tree, ":checked", nodes.text_input));
    assert!(matches(&tree, ":disabled", nodes.checkbox));
    assert!(matches(&tree, ":enabled", nodes.text_input));
    assert!(!matches(&tree, ":enabled", nodes.empty_p));
    assert!(!matches(&tree, ":disabled", nodes.empty_p));
}

#[test]
fn test_user_action_states_never_match() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    for state in [":hover", ":focus", ":visited", ":target", ":focus-within"] {
        let selector = format!("a{state}");
        assert!(!matches(&tree, &selector, nodes.link), "{selector}");
    }
}

#[test]
fn test_logical_pseudo_classes() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let [first, second, third] = nodes.items;

    assert!(matches(&tree, "li:not(.first)", second));
    assert!(!matches(&tree, "li:not(.first, .last)", third));
    assert!(matches(&tree, ":is(.first, .last)", third));
    assert!(!matches(&tree, ":is(.first, .last)", second));
    assert!(matches(&tree, "li:where(ul > .first)", first));
    assert!(matches(&tree, ":not(:nth-child(2)):not(.last)", first));
}

#[test]
fn test_is_and_where_drop_invalid_arguments() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let [first, second, third] = nodes.items;

    let forgiving = try_parse_selector(":is(.first, li:bogus, a!, [title=\"x)\" oops], .last)").unwrap();
    assert_eq!(forgiving.to_css_string(), ":is(.first, .last)");
    assert_eq!(forgiving.specificity(), Specificity::new(0, 1, 0));
    assert!(forgiving.matches(&element(&tree, first)));
    assert!(forgiving.matches(&element(&tree, third)));
    assert!(!forgiving.matches(&element(&tree, second)));

    let nothing_left = try_parse_selector("li:where(::before, :nope(1))").unwrap();
    assert_eq!(nothing_left.to_css_string(), "li:where()");
    assert_eq!(nothing_left.specificity(), Specificity::new(0, 0, 1));
    assert!(!nothing_left.matches(&element(&tree, first)));

    // :not() is not forgiving.
    assert_eq!(
        try_parse_selector("li:not(.first, a!)"),
        Err(SelectorError::UnexpectedChar('!'))
    );
    assert_eq!(
        try_parse_selector(":is(.first, a!"),
        Err(SelectorError::UnbalancedParens)
    );
}

#[test]
fn test_pseudo_element_selectors_never_match_elements() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let selector = try_parse_selector("li::after").unwrap();
    assert!(selector.pseudo_element().is_some());
    assert!(!selector.matches(&element(&tree, nodes.items[0])));
}

#[test]
fn test_selector_lists() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);
    let ul = element(&tree, nodes.ul);

    let list = parse_selector_list("p, ul, #nav");
    assert!(!list.is_unknown());
    assert_eq!(list.selectors().len(), 3);
    assert!(list.matches(&ul));
    assert_eq!(list.matching_specificity(&ul), Some(Specificity::new(1, 0, 0)));
    assert_eq!(list.to_css_string(), "p, ul, #nav");

    let first = element(&tree, nodes.items[0]);
    assert!(!list.matches(&first));
    assert_eq!(list.matching_specificity(&first), None);
}

#[test]
fn test_one_invalid_member_invalidates_the_list() {
    let mut tree = DomTree::new();
    let nodes = document(&mut tree);

    let list = parse_selector_list("ul, li:bogus");
    assert!(list.is_unknown());
    assert_eq!(list.selectors().len(), 1);
    assert_eq!(list.to_css_string(), "ul, li:bogus");
    assert!(!list.matches(&element(&tree, nodes.ul)));

    assert!(matches!(
        SelectorList::try_parse("ul, li:bogus"),
        Err(SelectorError::UnknownPseudoClass(_))
    ));
}
