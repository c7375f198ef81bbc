//! Whole-body center-of-mass estimation.
//!
//! Each anthropometric segment contributes its interpolated local COM
//! weighted by its share of body mass; the whole-body COM is the weighted
//! mean. Segments whose joints are missing from the snapshot are skipped
//! rather than failing the frame: skeletons may have incomplete rigs,
//! especially during model load.

use nalgebra::{Point3, Vector3};
use poise_core::math::{ground_projection, GroundPoint};
use poise_core::segment::SegmentTable;
use poise_core::skeleton::JointSnapshot;
use poise_core::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one COM estimation pass.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComEstimate {
    /// Whole-body center of mass in world space.
    pub position: Point3<f32>,
    /// Ground-plane projection of the COM.
    pub ground: GroundPoint,
    /// Mass actually accumulated (kg). Less than body mass when segments
    /// were skipped; zero when the estimate degenerated to the origin.
    pub accumulated_mass: f32,
    /// Segments that contributed to the estimate.
    pub segments_used: usize,
    /// Segments skipped because a bounding joint was missing.
    pub segments_skipped: usize,
}

impl ComEstimate {
    /// Returns true if no segment mass was accumulated and the COM was
    /// pinned to the origin.
    pub fn is_degenerate(&self) -> bool {
        self.accumulated_mass <= f32::EPSILON
    }
}

/// Weighted-segment COM estimator.
///
/// Holds the immutable segment table and the configured body mass; the
/// estimate itself is a pure function of the snapshot.
#[derive(Debug, Clone)]
pub struct ComEstimator {
    table: SegmentTable,
    body_mass: f32,
}

impl ComEstimator {
    /// Creates an estimator over a validated segment table.
    ///
    /// The body mass is taken as-is: a zero or negative mass is not an
    /// error here, it degrades to the origin sentinel at estimation time
    /// so a misconfigured frame can never divide by zero.
    pub fn new(table: SegmentTable, body_mass: f32) -> Result<Self> {
        table.validate()?;
        Ok(Self { table, body_mass })
    }

    /// The configured body mass in kilograms.
    pub fn body_mass(&self) -> f32 {
        self.body_mass
    }

    /// Estimates the whole-body COM for one snapshot.
    ///
    /// Segments with a missing bounding joint are skipped with a debug
    /// diagnostic. If no mass accumulates at all (every segment missing,
    /// or non-positive body mass), the COM is pinned to the origin and a
    /// warning is logged; never NaN, never a panic.
    pub fn estimate(&self, snapshot: &JointSnapshot) -> ComEstimate {
        let mut weighted = Vector3::zeros();
        let mut total_mass = 0.0f32;
        let mut used = 0;
        let mut skipped = 0;

        for seg in self.table.iter() {
            let (Some(proximal), Some(distal)) = (
                snapshot.position(seg.proximal),
                snapshot.position(seg.distal),
            ) else {
                log::debug!("segment `{}` skipped: bounding joint missing", seg.name);
                skipped += 1;
                continue;
            };
            let com = seg.point_on(&proximal, &distal);
            let mass = self.body_mass * seg.mass_fraction;
            weighted += com.coords * mass;
            total_mass += mass;
            used += 1;
        }

        if total_mass <= f32::EPSILON {
            log::warn!(
                "no segment mass accumulated ({skipped} of {} segments skipped); \
                 COM pinned to origin",
                self.table.len()
            );
            return ComEstimate {
                position: Point3::origin(),
                ground: GroundPoint::origin(),
                accumulated_mass: 0.0,
                segments_used: used,
                segments_skipped: skipped,
            };
        }

        let position = Point3::from(weighted / total_mass);
        ComEstimate {
            position,
            ground: ground_projection(&position),
            accumulated_mass: total_mass,
            segments_used: used,
            segments_skipped: skipped,
        }
    }
}
