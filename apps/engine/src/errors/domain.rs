//! Domain-level error type returned by every engine entry point.
//!
//! The engine never panics on bad input: the worst case is a typed
//! rejection carrying an [`ErrorCode`] for the presentation layer.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Validation failures: the request itself is wrong for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidCard,
    OutOfOrder,
    NotPermitted,
    InvalidSeat,
    InvalidSnapshot,
    ParseCard,
}

/// Conflicts with newer authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    StaleState,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn invalid_seat(player: u8) -> Self {
        Self::validation(
            ValidationKind::InvalidSeat,
            format!("seat {player} is outside 0..=3"),
        )
    }

    pub fn stale(detail: impl Into<String>) -> Self {
        Self::conflict(ConflictKind::StaleState, detail)
    }

    /// Reason code exposed to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidCard => ErrorCode::InvalidCard,
                ValidationKind::OutOfOrder => ErrorCode::OutOfOrder,
                ValidationKind::NotPermitted => ErrorCode::NotPermitted,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::InvalidSnapshot => ErrorCode::InvalidSnapshot,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
            },
            DomainError::Conflict(ConflictKind::StaleState, _) => ErrorCode::StaleState,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Conflict(_, d) => d,
        }
    }
}
