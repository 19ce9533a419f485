//! Runway coverage percentages and segment classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent of runway covered by one segment's contaminant, 0..=100.
///
/// Construction never fails: anything that is not a number in range
/// becomes 0. Deserialization goes through the same coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Coverage(u8);

impl Coverage {
    pub const ZERO: Coverage = Coverage(0);
    pub const MAX_PERCENT: i64 = 100;

    /// Coerce an integer percentage. Negative or > 100 becomes 0.
    pub fn from_percent(percent: i64) -> Self {
        if (0..=Self::MAX_PERCENT).contains(&percent) {
            Coverage(percent as u8)
        } else {
            Coverage(0)
        }
    }

    /// Coerce raw caller input such as a form field.
    ///
    /// Leading/trailing whitespace is ignored and fractional values are
    /// truncated; everything else that is not numeric becomes 0.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<i64>() {
            return Self::from_percent(value);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_percent(value.trunc() as i64),
            _ => {
                tracing::trace!(raw, "non-numeric coverage coerced to 0");
                Coverage(0)
            }
        }
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Coverage {
    fn from(percent: i64) -> Self {
        Self::from_percent(percent)
    }
}

impl From<Coverage> for u8 {
    fn from(coverage: Coverage) -> Self {
        coverage.0
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Number of segments in effect: 0 if both are zero, 2 if both are
/// non-zero, 1 otherwise.
pub fn segment_count(segment1: Coverage, segment2: Coverage) -> u8 {
    match (segment1.is_zero(), segment2.is_zero()) {
        (true, true) => 0,
        (false, false) => 2,
        _ => 1,
    }
}

/// Sum of both coverages. May exceed 100.
pub fn total_percent(segment1: Coverage, segment2: Coverage) -> u16 {
    u16::from(segment1.0) + u16::from(segment2.0)
}
