//! Fluent construction of compound and combined selector strings.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;

use crate::category::Category;
use crate::error::SelectorError;

/// Accumulates selector fragments in the mandatory category order and
/// renders the compound selector's textual representation.
///
/// Fragment methods consume the builder and hand it back on success, so a
/// chain reads left to right exactly like the selector it produces:
///
/// ```
/// use quokka_selector::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.as_str(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), quokka_selector::SelectorError>(())
/// ```
///
/// On a violation the failing call returns [`SelectorError`] and the builder
/// is gone; a partially assembled selector cannot be observed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Rendered selector text so far.
    text: String,
    /// Category of the last appended fragment (`None` before the first).
    last: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder holding no fragments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: None,
        }
    }

    /// Create a builder already holding one fragment.
    ///
    /// A first fragment can violate neither the ordering nor the uniqueness
    /// invariant, so this is infallible. Used by the crate-root facade.
    pub(crate) fn seeded(category: Category, value: &str) -> Self {
        let mut text = String::new();
        category.push_fragment(&mut text, value);
        Self {
            text,
            last: Some(category),
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a tag-name fragment (`div`). Must come first and at most once.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any other fragment precedes it,
    /// [`SelectorError::Duplicate`] on a second element.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#value`. At most once per selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after any higher-ranked fragment,
    /// [`SelectorError::Duplicate`] on a second id.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after any higher-ranked fragment.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[value]`. The bracketed condition is inserted verbatim,
    /// operator and quote characters included; no syntax validation.
    /// Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after any higher-ranked fragment.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] after a pseudo-element.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::value`. At most once, and nothing may follow it.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] on a second pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// The accumulated selector text. Idempotent; rendering never mutates
    /// the builder.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The ordering/uniqueness check applied before every fragment append:
    ///
    /// 1. a fragment ranked below the last one is out of order;
    /// 2. a repeat of a single-occurrence category is a duplicate;
    /// 3. otherwise the fragment is rendered and becomes the new last.
    fn append(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        if let Some(last) = self.last {
            if last.rank() > category.rank() {
                return Err(SelectorError::OutOfOrder);
            }
            if last == category && !category.is_repeatable() {
                return Err(SelectorError::Duplicate);
            }
        }
        category.push_fragment(&mut self.text, value);
        self.last = Some(category);
        Ok(self)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// A selector produced by joining two built selectors with a combinator
/// token. Terminal: it renders its text and may itself be combined again,
/// but accepts no further fragments. The ordering invariant of its sides
/// is already sealed inside the joined string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    /// `"<left> <combinator> <right>"`, single spaces around the token.
    text: String,
}

impl CombinedSelector {
    pub(crate) fn join(left: &dyn fmt::Display, combinator: &str, right: &dyn fmt::Display) -> Self {
        Self {
            text: format!("{left} {combinator} {right}"),
        }
    }

    /// The joined selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectorBuilder, SelectorError};

    // The state-machine cases that are easiest to pin down right next to
    // `append`; end-to-end orderings live in tests/builder_tests.rs.

    #[test]
    fn equal_rank_repeatable_passes() {
        let builder = SelectorBuilder::new()
            .class("a")
            .unwrap()
            .class("b")
            .unwrap();
        assert_eq!(builder.as_str(), ".a.b");
    }

    #[test]
    fn equal_rank_single_occurrence_fails() {
        let result = SelectorBuilder::new().id("a").unwrap().id("b");
        assert_eq!(result.unwrap_err(), SelectorError::Duplicate);
    }

    #[test]
    fn lower_rank_after_higher_fails() {
        let result = SelectorBuilder::new().class("a").unwrap().element("div");
        assert_eq!(result.unwrap_err(), SelectorError::OutOfOrder);
    }

    #[test]
    fn empty_builder_renders_empty() {
        assert_eq!(SelectorBuilder::new().as_str(), "");
    }

    #[test]
    fn rendering_is_idempotent() {
        let builder = SelectorBuilder::new().element("div").unwrap();
        assert_eq!(builder.as_str(), "div");
        assert_eq!(builder.as_str(), "div");
        assert_eq!(builder.to_string(), "div");
    }
}
