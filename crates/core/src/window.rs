//! Validity Windows

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::records::PriceRecordError;

/// Closed interval of time during which a price record may apply.
///
/// Both bounds are inclusive: an instant equal to `start` or to `end` is
/// inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct ValidityWindow {
    start: Timestamp,
    end: Timestamp,
}

#[derive(Deserialize)]
struct RawWindow {
    start: Timestamp,
    end: Timestamp,
}

impl ValidityWindow {
    /// Creates a window from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PriceRecordError::InvalidWindow`] when `start` is after `end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, PriceRecordError> {
        if start > end {
            return Err(PriceRecordError::InvalidWindow { start, end });
        }

        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Inclusive upper bound.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Whether `at` falls within `[start, end]`.
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whether both windows share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl TryFrom<RawWindow> for ValidityWindow {
    type Error = PriceRecordError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}
