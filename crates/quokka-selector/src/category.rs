//! Fragment categories and the compound-selector ordering they impose.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator... If it contains a type selector or universal
//! selector, that selector must come first in the sequence."

use strum_macros::Display;

/// The category of a selector fragment.
///
/// The discriminant is the fragment's rank: the mandatory left-to-right
/// position of its category within one compound selector. A builder may only
/// append fragments in non-decreasing rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `a`
    #[strum(serialize = "element")]
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#nav-bar`
    #[strum(serialize = "id")]
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.btn`
    #[strum(serialize = "class")]
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The bracketed condition is taken verbatim from the caller, operator
    /// and quotes included.
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    #[strum(serialize = "attribute")]
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// "A pseudo-class is always a colon (:) followed by the name of the
    /// pseudo-class."
    ///
    /// Examples: `:hover`, `:first-child`
    #[strum(serialize = "pseudo-class")]
    PseudoClass = 5,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "The syntax of a pseudo-element is two colons (::) followed by the
    /// name of the pseudo-element."
    ///
    /// Examples: `::before`, `::placeholder`
    #[strum(serialize = "pseudo-element")]
    PseudoElement = 6,
}

impl Category {
    /// Ordinal position of this category within a compound selector (1-6).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether fragments of this category may appear more than once per
    /// compound selector.
    ///
    /// Element, id and pseudo-element are single-occurrence; class,
    /// attribute and pseudo-class repeat freely.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Append one fragment of this category to `out`, with the category's
    /// designated prefix/wrapping characters. `value` is inserted verbatim.
    pub(crate) fn push_fragment(self, out: &mut String, value: &str) {
        match self {
            Self::Element => out.push_str(value),
            Self::Id => {
                out.push('#');
                out.push_str(value);
            }
            Self::Class => {
                out.push('.');
                out.push_str(value);
            }
            Self::Attribute => {
                out.push('[');
                out.push_str(value);
                out.push(']');
            }
            Self::PseudoClass => {
                out.push(':');
                out.push_str(value);
            }
            Self::PseudoElement => {
                out.push_str("::");
                out.push_str(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn ranks_follow_compound_order() {
        assert!(Category::Element.rank() < Category::Id.rank());
        assert!(Category::Id.rank() < Category::Class.rank());
        assert!(Category::Class.rank() < Category::Attribute.rank());
        assert!(Category::Attribute.rank() < Category::PseudoClass.rank());
        assert!(Category::PseudoClass.rank() < Category::PseudoElement.rank());
    }

    #[test]
    fn repeatability_table() {
        assert!(!Category::Element.is_repeatable());
        assert!(!Category::Id.is_repeatable());
        assert!(Category::Class.is_repeatable());
        assert!(Category::Attribute.is_repeatable());
        assert!(Category::PseudoClass.is_repeatable());
        assert!(!Category::PseudoElement.is_repeatable());
    }

    #[test]
    fn display_names() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::Attribute.to_string(), "attribute");
    }
}
