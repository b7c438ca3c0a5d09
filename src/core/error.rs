//! Selector errors.

use thiserror::Error;

/// Errors raised while choosing a variant from a selector character.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("invalid {context} selection '{selector}'")]
    Unknown {
        context: &'static str,
        selector: char,
    },
}
