use core::ops::Range;

use thiserror::Error;

/// Reasons a checked view constructor rejects a range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[error("view range starts at {start} but ends at {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("view range ends at {end} but the storage has length {len}")]
    OutOfBounds { end: usize, len: usize },
}

pub type Result<T, E = ViewError> = core::result::Result<T, E>;

/// Validates `range` against storage of length `len`.
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    let Range { start, end } = *range;
    let outcome = if start > end {
        Err(ViewError::InvertedRange { start, end })
    } else if end > len {
        Err(ViewError::OutOfBounds { end, len })
    } else {
        Ok(())
    };
    if let Err(error) = &outcome {
        tracing::debug!(start, end, len, %error, "Rejected view range");
    }
    outcome
}
