//! Fluent, order-checked construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragment categories** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - The six fragment categories of a compound selector and their
//!     mandatory left-to-right order: element, id, class, attribute,
//!     pseudo-class, pseudo-element
//!   - Single-occurrence rules for element, id and pseudo-element
//!
//! - **Selector builder**
//!   - A chainable builder that appends fragments, rejecting out-of-order
//!     and disallowed-repeat calls at the offending append
//!   - Rendering of the accumulated text on demand, idempotently
//!
//! - **Combinator composition** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two built selectors with a caller-supplied combinator token
//!     into a terminal [`CombinedSelector`]
//!
//! # Not in scope
//!
//! - Parsing of arbitrary CSS
//! - Selector matching against a document tree
//! - Validation of attribute-value syntax or CSS-identifier legality
//!   (all values are inserted verbatim)

/// Fluent builder over selector fragments.
pub mod builder;
/// Fragment categories and their compound-selector ranks.
pub mod category;
/// Ordering and uniqueness violations.
pub mod error;

pub use builder::{CombinedSelector, SelectorBuilder};
pub use category::Category;
pub use error::SelectorError;

use std::fmt;

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a selector with a tag-name fragment: `element("div")` renders `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Element, value)
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a selector with an id fragment: `id("main")` renders `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Id, value)
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a selector with a class fragment: `class("btn")` renders `.btn`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Class, value)
}

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a selector with an attribute fragment: `attr("href")` renders
/// `[href]`. The condition text is taken verbatim.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::Attribute, value)
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a selector with a pseudo-class fragment: `pseudo_class("hover")`
/// renders `:hover`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::PseudoClass, value)
}

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a selector with a pseudo-element fragment:
/// `pseudo_element("before")` renders `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Category::PseudoElement, value)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two built selectors with a combinator token:
/// `"<left> <token> <right>"`, one space on each side. The token is
/// caller-supplied and not validated against the four standard combinators.
///
/// Both sides are read, never mutated, so passing the same selector twice
/// is fine. Any renderable selector works as a side: a [`SelectorBuilder`],
/// a [`CombinedSelector`] (combinations nest), or a plain string.
///
/// ```
/// use quokka_selector::{combine, element};
///
/// let rule = combine(
///     &element("div").id("main")?,
///     "~",
///     &element("table").id("data")?,
/// );
/// assert_eq!(rule.as_str(), "div#main ~ table#data");
/// # Ok::<(), quokka_selector::SelectorError>(())
/// ```
#[must_use]
pub fn combine(
    left: &impl fmt::Display,
    combinator: &str,
    right: &impl fmt::Display,
) -> CombinedSelector {
    CombinedSelector::join(left, combinator, right)
}
