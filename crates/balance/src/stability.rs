//! Static stability analysis.
//!
//! Classifies the COM's ground projection against the base-of-support
//! polygon: inside/outside via even-odd ray casting, and a stability
//! margin as the minimum distance to any polygon edge.

use crate::support::SupportPolygon;
use poise_core::math::{ring_contains, segment_distance, GroundPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one stability analysis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilityResult {
    /// Minimum distance (ground-plane units) from the COM projection to
    /// any edge of the support polygon. Zero when no polygon was
    /// available.
    pub margin: f32,
    /// True iff the COM projection lies inside the polygon.
    pub is_stable: bool,
    /// True iff a support polygon was available this frame. When false,
    /// `margin` and `is_stable` are the safe defaults, not measurements.
    pub supported: bool,
}

impl StabilityResult {
    /// The safe default when no support polygon exists.
    pub fn unsupported() -> Self {
        Self {
            margin: 0.0,
            is_stable: false,
            supported: false,
        }
    }
}

/// Presentation-facing classification of a stability result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StabilityZone {
    /// COM projection outside the base of support (or no base available).
    Unstable,
    /// Stable, but the margin is below the warning threshold.
    NearEdge,
    /// Stable with comfortable margin.
    Good,
}

/// Point-in-polygon and edge-distance analysis over the support polygon.
#[derive(Debug, Clone)]
pub struct StabilityAnalyzer {
    warning_margin: f32,
}

impl StabilityAnalyzer {
    /// Creates an analyzer with the given near-edge warning threshold.
    pub fn new(warning_margin: f32) -> Self {
        Self { warning_margin }
    }

    /// The configured warning threshold.
    pub fn warning_margin(&self) -> f32 {
        self.warning_margin
    }

    /// Analyzes one frame.
    ///
    /// An absent polygon yields the safe default `(margin 0, unstable)`
    /// rather than an error: a frame without foot data must not halt the
    /// update loop.
    pub fn analyze(
        &self,
        com: GroundPoint,
        polygon: Option<&SupportPolygon>,
    ) -> StabilityResult {
        let Some(polygon) = polygon else {
            return StabilityResult::unsupported();
        };

        let is_stable = ring_contains(polygon.vertices(), com);
        let margin = polygon
            .edges()
            .map(|(a, b)| segment_distance(com, a, b))
            .fold(f32::INFINITY, f32::min);

        StabilityResult {
            margin,
            is_stable,
            supported: true,
        }
    }

    /// Maps a result onto the presentation zones: unstable regardless of
    /// margin when outside, near-edge when the margin dips below the
    /// warning threshold, good otherwise.
    pub fn classify(&self, result: &StabilityResult) -> StabilityZone {
        if !result.supported || !result.is_stable {
            StabilityZone::Unstable
        } else if result.margin < self.warning_margin {
            StabilityZone::NearEdge
        } else {
            StabilityZone::Good
        }
    }
}

impl Default for StabilityAnalyzer {
    fn default() -> Self {
        Self::new(poise_core::DEFAULT_WARNING_MARGIN)
    }
}
