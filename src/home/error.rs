//! Home construction and registry errors.

use crate::device::DeviceKind;
use thiserror::Error;

/// Errors that can occur when building a home.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("History capacity must be at least 1. Call .history_capacity(n) with n > 0")]
    ZeroHistoryCapacity,
}

/// Errors raised by registry commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HomeError {
    #[error("device count must be at least 1")]
    InvalidCount,

    #[error("invalid {kind} index {index} (have {len})")]
    InvalidIndex {
        kind: DeviceKind,
        index: usize,
        len: usize,
    },

    #[error("no device at registry position {index} (have {len})")]
    NoSuchDevice { index: usize, len: usize },

    #[error("the {0} is a singleton and cannot be added or removed")]
    SingletonDevice(DeviceKind),
}
