//! [§ 3.2 Selector matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)

use core::iter;

use super::{AttributeOperator, AttributeSelector, Combinator, Element, PseudoClass, Selector, SimpleSelector};

impl Selector {
    /// "A selector is said to match an element when the element is among
    /// the elements represented by the selector."
    ///
    /// Complex selectors match right to left: the subject compound must
    /// match `element`, then some related element must match the left side.
    /// Every candidate is tried, so `a > b c` finds a `b` child of an `a`
    /// even when a nearer ancestor `b` is not. Unknown selectors, and
    /// selectors whose subject is a pseudo-element, never match.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match self {
            Self::Simple(simple) => simple.matches(element),
            Self::Compound(simples) => simples.iter().all(|simple| simple.matches(element)),
            Self::Complex {
                left,
                combinator,
                right,
            } => right.matches(element) && related_matches(left, *combinator, element),
            Self::Unknown(_) => false,
        }
    }
}

fn related_matches<E: Element>(left: &Selector, combinator: Combinator, element: &E) -> bool {
    match combinator {
        // [§ 16.1](https://www.w3.org/TR/selectors-4/#descendant-combinators)
        Combinator::Descendant => ancestors(element).any(|ancestor| left.matches(&ancestor)),
        // [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators)
        Combinator::Child => element
            .parent_element()
            .is_some_and(|parent| left.matches(&parent)),
        // [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
        Combinator::NextSibling => element
            .prev_element_sibling()
            .is_some_and(|sibling| left.matches(&sibling)),
        // [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
        Combinator::SubsequentSibling => {
            preceding_siblings(element).any(|sibling| left.matches(&sibling))
        }
    }
}

fn ancestors<E: Element>(element: &E) -> impl Iterator<Item = E> {
    iter::successors(element.parent_element(), E::parent_element)
}

fn preceding_siblings<E: Element>(element: &E) -> impl Iterator<Item = E> {
    iter::successors(element.prev_element_sibling(), E::prev_element_sibling)
}

fn following_siblings<E: Element>(element: &E) -> impl Iterator<Item = E> {
    iter::successors(element.next_element_sibling(), E::next_element_sibling)
}

impl SimpleSelector {
    /// Check if this simple selector matches the given element.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match self {
            // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
            // "A type selector written in the style sheet as an identifier represents
            // an element in the document tree with the same qualified name as the identifier."
            Self::Type(name) => element.local_name().eq_ignore_ascii_case(name),

            // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
            Self::Universal => true,

            // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
            Self::Class(class_name) => element.has_class(class_name),

            // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
            // "An ID selector represents an element instance that has an identifier
            // that matches the identifier in the ID selector."
            Self::Id(id) => element.id() == Some(id.as_str()),

            Self::Attribute(attribute) => attribute.matches(element),

            Self::PseudoClass(pseudo_class) => pseudo_class.matches(element),

            // Pseudo-elements are not elements.
            Self::PseudoElement(_) => false,
        }
    }
}

impl AttributeSelector {
    /// [§ 6.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        let Some(actual) = element.attribute(&self.name) else {
            return false;
        };
        let Some((operator, expected)) = &self.matcher else {
            return true;
        };

        let (actual, expected) = if self.case_insensitive {
            (actual.to_ascii_lowercase(), expected.to_ascii_lowercase())
        } else {
            (actual.to_string(), expected.clone())
        };

        match operator {
            AttributeOperator::Equals => actual == expected,
            // "If 'val' contains whitespace, it will never represent anything
            // (since the words are separated by spaces). Also if 'val' is the
            // empty string, it will never represent anything."
            AttributeOperator::Includes => {
                !expected.is_empty()
                    && !expected.contains(|c: char| c.is_ascii_whitespace())
                    && actual.split_ascii_whitespace().any(|word| word == expected)
            }
            AttributeOperator::DashMatch => {
                actual == expected
                    || actual
                        .strip_prefix(expected.as_str())
                        .is_some_and(|rest| rest.starts_with('-'))
            }
            // [§ 6.2 Substring matching attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-substrings)
            // "If 'val' is the empty string then the selector does not represent anything."
            AttributeOperator::Prefix => !expected.is_empty() && actual.starts_with(&expected),
            AttributeOperator::Suffix => !expected.is_empty() && actual.ends_with(&expected),
            AttributeOperator::Substring => !expected.is_empty() && actual.contains(&expected),
        }
    }
}

impl PseudoClass {
    /// Match this pseudo-class against an element with full tree context.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match self {
            // [§ 14.1 :root](https://www.w3.org/TR/selectors-4/#the-root-pseudo)
            Self::Root => element.is_root(),

            // [§ 14.2 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
            Self::Empty => element.is_empty(),

            // [§ 14.4.1 :first-child](https://www.w3.org/TR/selectors-4/#the-first-child-pseudo)
            // "The :first-child pseudo-class represents an element that is first among its
            // inclusive siblings."
            Self::FirstChild => element.prev_element_sibling().is_none(),

            // [§ 14.4.2 :last-child](https://www.w3.org/TR/selectors-4/#the-last-child-pseudo)
            Self::LastChild => element.next_element_sibling().is_none(),

            // [§ 14.4.3 :only-child](https://www.w3.org/TR/selectors-4/#the-only-child-pseudo)
            // "The :only-child pseudo-class represents an element that has no siblings."
            Self::OnlyChild => {
                element.prev_element_sibling().is_none() && element.next_element_sibling().is_none()
            }

            // [§ 14.5.3 :first-of-type](https://www.w3.org/TR/selectors-4/#the-first-of-type-pseudo)
            Self::FirstOfType => !preceding_siblings(element).any(|sibling| same_type(&sibling, element)),

            // [§ 14.5.4 :last-of-type](https://www.w3.org/TR/selectors-4/#the-last-of-type-pseudo)
            Self::LastOfType => !following_siblings(element).any(|sibling| same_type(&sibling, element)),

            // [§ 14.5.5 :only-of-type](https://www.w3.org/TR/selectors-4/#the-only-of-type-pseudo)
            Self::OnlyOfType => {
                !preceding_siblings(element).any(|sibling| same_type(&sibling, element))
                    && !following_siblings(element).any(|sibling| same_type(&sibling, element))
            }

            // [§ 14.3.1 :nth-child()](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
            Self::NthChild(nth) => nth.matches(1 + preceding_siblings(element).count()),

            // [§ 14.3.2 :nth-last-child()](https://www.w3.org/TR/selectors-4/#the-nth-last-child-pseudo)
            Self::NthLastChild(nth) => nth.matches(1 + following_siblings(element).count()),

            // [§ 14.5.1 :nth-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-of-type-pseudo)
            Self::NthOfType(nth) => nth.matches(
                1 + preceding_siblings(element)
                    .filter(|sibling| same_type(sibling, element))
                    .count(),
            ),

            // [§ 14.5.2 :nth-last-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-last-of-type-pseudo)
            Self::NthLastOfType(nth) => nth.matches(
                1 + following_siblings(element)
                    .filter(|sibling| same_type(sibling, element))
                    .count(),
            ),

            // [HTML § 4.16.3](https://html.spec.whatwg.org/multipage/semantics-other.html#selector-link)
            // ":link: All a elements that have an href attribute, and all area
            // elements that have an href attribute." Nothing is visited, so
            // :link and :any-link coincide.
            Self::Link | Self::AnyLink => {
                matches!(element.local_name(), "a" | "area") && element.attribute("href").is_some()
            }

            // [HTML § 4.16.3](https://html.spec.whatwg.org/multipage/semantics-other.html#selector-disabled)
            Self::Disabled => is_form_control(element) && element.attribute("disabled").is_some(),
            Self::Enabled => is_form_control(element) && element.attribute("disabled").is_none(),

            // [HTML § 4.16.3](https://html.spec.whatwg.org/multipage/semantics-other.html#selector-checked)
            // "input elements whose type attribute is in the Checkbox state or
            // the Radio Button state and whose checkedness is true; option
            // elements whose selectedness is true."
            Self::Checked => match element.local_name() {
                "input" => {
                    element.attribute("checked").is_some()
                        && element.attribute("type").is_some_and(|kind| {
                            kind.eq_ignore_ascii_case("checkbox") || kind.eq_ignore_ascii_case("radio")
                        })
                }
                "option" => element.attribute("selected").is_some(),
                _ => false,
            },

            // [§ 4.3](https://www.w3.org/TR/selectors-4/#negation)
            Self::Not(arguments) => !arguments.iter().any(|argument| argument.matches(element)),

            // [§ 4.2](https://www.w3.org/TR/selectors-4/#matches) and
            // [§ 4.4](https://www.w3.org/TR/selectors-4/#zero-matches)
            Self::Is(arguments) | Self::Where(arguments) => {
                arguments.iter().any(|argument| argument.matches(element))
            }

            Self::UserAction(_) => false,
        }
    }
}

fn same_type<E: Element>(a: &E, b: &E) -> bool {
    a.local_name().eq_ignore_ascii_case(b.local_name())
}

fn is_form_control<E: Element>(element: &E) -> bool {
    matches!(
        element.local_name(),
        "button" | "input" | "select" | "textarea" | "optgroup" | "option" | "fieldset"
    )
}
