//! Boundary errors for parsing caller-supplied values.
//!
//! The resolver itself is total and never returns these; they only surface
//! when legacy strings are converted into typed values.

use thiserror::Error;

/// Error returned when a catalog value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The surface kind is neither gravel nor paved.
    #[error("unknown runway surface '{0}' (expected gravel or paved)")]
    UnknownSurface(String),

    /// The description does not name any contaminant in the catalog.
    #[error("unknown contaminant description '{0}'")]
    UnknownContaminant(String),

    /// A condition code outside 0..=6.
    #[error("runway condition code {0} is out of range 0..=6")]
    CodeOutOfRange(i64),
}

/// Error returned by the wind component helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindError {
    /// Runway designator is not 01..=36 with an optional L/C/R suffix.
    #[error("invalid runway designator '{0}'")]
    InvalidRunway(String),

    /// Wind speed is negative or not finite.
    #[error("invalid wind speed {0} kt")]
    InvalidSpeed(f64),

    /// Wind direction is not finite.
    #[error("invalid wind direction {0}°")]
    InvalidDirection(f64),
}
