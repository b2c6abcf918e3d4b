//! Domain error types.
//!
//! These errors represent invariant violations in network data. They are
//! distinct from query errors, which are ordinary outcomes of routing.

use super::LineId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A line was given no stations
    #[error("line {0} has no stations")]
    EmptyLine(LineId),

    /// Two lines share an identifier
    #[error("line id {0} is used more than once")]
    DuplicateLine(LineId),
}
