//! Error types for configuration and table validation.
//!
//! Per-frame failure modes (missing joints, zero accumulated mass, absent
//! support polygon) are NOT errors: they are recovered locally with defined
//! default outputs so a bad frame never halts the update loop. [`Error`] is
//! reserved for construction time, when a caller hands over an invalid
//! configuration or segment table.

use thiserror::Error;

/// Errors that can occur when building the analysis pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid runtime configuration (body mass, thresholds).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Segment mass fractions do not sum to 1.0.
    #[error("segment mass fractions sum to {sum}, expected 1.0")]
    SegmentTable {
        /// The actual sum of all mass fractions.
        sum: f32,
    },

    /// A segment carries a fraction outside [0, 1].
    #[error("segment `{segment}` has fraction {value} outside [0, 1]")]
    Fraction {
        /// Name of the offending segment.
        segment: &'static str,
        /// The out-of-range fraction value.
        value: f32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
