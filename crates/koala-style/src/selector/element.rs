//! The element interface selectors match against.

use koala_dom::ElementRef;

/// Read-only view of an element and its neighbours.
///
/// Selector matching only ever calls these methods, so any document model
/// can be matched by implementing this trait. Implementations must not
/// mutate on read: matching may run concurrently.
pub trait Element: Clone {
    /// The element's local name, ASCII-lowercased for HTML elements.
    fn local_name(&self) -> &str;

    /// The value of the `id` attribute.
    fn id(&self) -> Option<&str>;

    /// True if `name` is one of the element's classes (case-sensitive).
    fn has_class(&self, name: &str) -> bool;

    /// The value of the attribute with the given lowercase name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The parent, if it is an element.
    fn parent_element(&self) -> Option<Self>;

    /// The nearest preceding sibling that is an element.
    fn prev_element_sibling(&self) -> Option<Self>;

    /// The nearest following sibling that is an element.
    fn next_element_sibling(&self) -> Option<Self>;

    /// True for the document element.
    fn is_root(&self) -> bool;

    /// [§ 14.2 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
    ///
    /// True if the element has no element children and no text.
    fn is_empty(&self) -> bool;
}

impl Element for ElementRef<'_> {
    fn local_name(&self) -> &str {
        &self.data().tag_name
    }

    fn id(&self) -> Option<&str> {
        self.data().id()
    }

    fn has_class(&self, name: &str) -> bool {
        self.data().classes().any(|class| class == name)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.data().attr(name)
    }

    fn parent_element(&self) -> Option<Self> {
        Self::parent_element(self)
    }

    fn prev_element_sibling(&self) -> Option<Self> {
        Self::prev_element_sibling(self)
    }

    fn next_element_sibling(&self) -> Option<Self> {
        Self::next_element_sibling(self)
    }

    fn is_root(&self) -> bool {
        self.is_document_element()
    }

    fn is_empty(&self) -> bool {
        self.has_no_content()
    }
}
