//! Errors raised when a selector is assembled against the category rules.

use thiserror::Error;

/// Contract violations raised at the offending fragment append.
///
/// Both variants are programming errors at the call site; there is no
/// recovery path. A failing append consumes the builder, so no
/// half-built instance survives the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment of a lower-ranked category was appended after a
    /// higher-ranked one.
    #[error(
        "selector parts must be arranged in order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder,

    /// A single-occurrence category (element, id or pseudo-element) was
    /// appended a second time on the same builder.
    #[error("element, id and pseudo-element may occur at most once per selector")]
    Duplicate,
}
