//! Crate-level error.

use crate::core::SelectorError;
use crate::history::HistoryError;
use crate::home::{BuildError, HomeError};
use thiserror::Error;

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Home(#[from] HomeError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
