//! Chart-level errors.

use natal_time::TimeError;
use thiserror::Error;

/// Errors a chart request can surface to the caller.
///
/// House-system failures never appear here; the selector absorbs them
/// by degrading to an always-defined system. What remains is invalid
/// input, which no tier can fix, and an exhausted fallback chain.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The birth moment could not be validated or resolved to UTC.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Every tier failed. The minimal tier cannot fail, so this is
    /// unreachable in practice but kept explicit rather than panicking.
    #[error("no calculation tier produced a chart")]
    NoTierAvailable,
}
