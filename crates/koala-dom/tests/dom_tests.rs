//! Tests for DOM tree construction and element navigation.

use koala_dom::{DomTree, ElementData, NodeId, NodeType};

/// Build `<html><body><p/>text<!--c--><span/></body></html>` and return
/// (body, p, span).
fn sample_tree(tree: &mut DomTree) -> (NodeId, NodeId, NodeId) {
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = tree.append_element(html, ElementData::new("body"));
    let p = tree.append_element(body, ElementData::new("p"));
    let _ = tree.append_text(body, "text");
    let comment = tree.alloc(NodeType::Comment("c".to_string()));
    tree.append_child(body, comment);
    let span = tree.append_element(body, ElementData::new("SPAN"));
    (body, p, span)
}

#[test]
fn test_append_child_links_siblings() {
    let mut tree = DomTree::new();
    let (body, p, span) = sample_tree(&mut tree);

    assert_eq!(tree.children(body).len(), 4);
    assert_eq!(tree.parent(p), Some(body));
    assert_eq!(tree.prev_sibling(p), None);
    assert_eq!(tree.next_sibling(span), None);
    assert_eq!(tree.following_siblings(p).count(), 3);
    assert_eq!(tree.preceding_siblings(span).count(), 3);
}

#[test]
fn test_ancestors_run_to_document() {
    let mut tree = DomTree::new();
    let (body, p, _) = sample_tree(&mut tree);

    let ancestors: Vec<_> = tree.ancestors(p).collect();
    assert_eq!(ancestors.len(), 3);
    assert_eq!(ancestors[0], body);
    assert_eq!(ancestors[2], NodeId::ROOT);
}

#[test]
fn test_element_data_lowercases_names() {
    let data = ElementData::new("DIV")
        .with_attr("ID", "main")
        .with_attr("class", "  a   b ");

    assert_eq!(data.tag_name, "div");
    assert_eq!(data.id(), Some("main"));
    assert_eq!(data.classes().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(data.attr("missing"), None);
}

#[test]
fn test_element_ref_skips_non_element_siblings() {
    let mut tree = DomTree::new();
    let (body, p, span) = sample_tree(&mut tree);

    let span_ref = tree.element(span).unwrap();
    assert_eq!(span_ref.data().tag_name, "span");
    assert_eq!(span_ref.prev_element_sibling().unwrap().node_id(), p);
    assert_eq!(span_ref.parent_element().unwrap().node_id(), body);

    let p_ref = tree.element(p).unwrap();
    assert_eq!(p_ref.next_element_sibling().unwrap().node_id(), span);
    assert!(p_ref.prev_element_sibling().is_none());
}

#[test]
fn test_element_ref_only_for_elements() {
    let mut tree = DomTree::new();
    let (body, _, _) = sample_tree(&mut tree);
    let text = tree.children(body)[1];

    assert!(tree.element(text).is_none());
    assert!(tree.element(NodeId::ROOT).is_none());
}

#[test]
fn test_document_element_and_parent_of_root() {
    let mut tree = DomTree::new();
    let (_, p, _) = sample_tree(&mut tree);
    let html = tree.document_element().unwrap();

    let html_ref = tree.element(html).unwrap();
    assert!(html_ref.is_document_element());
    assert!(html_ref.parent_element().is_none());
    assert!(!tree.element(p).unwrap().is_document_element());
}

#[test]
fn test_has_no_content() {
    let mut tree = DomTree::new();
    let (body, p, _) = sample_tree(&mut tree);

    assert!(tree.element(p).unwrap().has_no_content());
    assert!(!tree.element(body).unwrap().has_no_content());

    let div = tree.append_element(body, ElementData::new("div"));
    let comment = tree.alloc(NodeType::Comment("only a comment".to_string()));
    tree.append_child(div, comment);
    assert!(tree.element(div).unwrap().has_no_content());

    let _ = tree.append_text(div, " ");
    assert!(!tree.element(div).unwrap().has_no_content());
}
