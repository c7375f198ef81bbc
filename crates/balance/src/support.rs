//! Base-of-support polygon construction.

use poise_core::math::{ground_projection, GroundPoint};
use poise_core::skeleton::{JointRole, JointSnapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ground-plane quadrilateral under the feet.
///
/// Vertices are the projections of the four foot landmarks in fixed
/// winding order: left foot, right foot, right toe, left toe. This is NOT
/// a convex-hull computation; the fixed ordering is only guaranteed
/// non-self-intersecting for a forward-facing standing stance, which is a
/// known approximation of this model. Rotated or crossed-leg stances fall
/// outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SupportPolygon {
    vertices: [GroundPoint; 4],
}

impl SupportPolygon {
    /// Builds the polygon from the four foot landmarks.
    ///
    /// Returns `None` when any landmark is missing from the snapshot, an
    /// expected state (e.g. during model load) that disables stability
    /// analysis for the frame.
    pub fn from_snapshot(snapshot: &JointSnapshot) -> Option<Self> {
        let left_foot = snapshot.position(JointRole::LeftFoot)?;
        let right_foot = snapshot.position(JointRole::RightFoot)?;
        let right_toe = snapshot.position(JointRole::RightToe)?;
        let left_toe = snapshot.position(JointRole::LeftToe)?;
        Some(Self {
            vertices: [
                ground_projection(&left_foot),
                ground_projection(&right_foot),
                ground_projection(&right_toe),
                ground_projection(&left_toe),
            ],
        })
    }

    /// The four vertices in winding order.
    pub fn vertices(&self) -> &[GroundPoint; 4] {
        &self.vertices
    }

    /// Mean of the four vertices.
    pub fn center(&self) -> GroundPoint {
        let sum = self
            .vertices
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, v| acc + v.coords);
        GroundPoint::from(sum / 4.0)
    }

    /// Iterates the four edges as (start, end) pairs, closing the ring.
    pub fn edges(&self) -> impl Iterator<Item = (GroundPoint, GroundPoint)> + '_ {
        (0..4).map(move |i| (self.vertices[i], self.vertices[(i + 1) % 4]))
    }
}
