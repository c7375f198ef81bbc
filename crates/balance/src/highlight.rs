//! Instability direction and segment highlighting.
//!
//! When the COM leaves the base of support, the presentation layer wants
//! to know which body part to tint. The joint whose ground-plane offset
//! from the support center is most aligned with the instability direction
//! (maximum dot product) is the one displaced furthest toward the
//! imbalance.

use poise_core::math::{ground_projection, GroundPoint};
use poise_core::skeleton::{JointRole, JointSnapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A joint flagged for visual highlight, with its proximal neighbor so the
/// whole segment between them can be tinted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Highlight {
    /// The most unstable joint.
    pub joint: JointRole,
    /// Proximal end of the segment terminating at `joint`, when the role
    /// has one.
    pub parent: Option<JointRole>,
    /// Dot product of the joint offset with the instability vector;
    /// larger means more displaced toward the imbalance.
    pub score: f32,
}

/// Finds the joint most displaced in the direction of imbalance.
///
/// Candidates are scanned in [`JointRole::ALL`] canonical order, so a tied
/// score resolves to the earlier role deterministically. Roles listed in
/// `excluded` (typically the foot/toe landmarks: they are the base, not
/// the imbalance) and roles absent from the snapshot are skipped. Returns
/// `None` when the instability vector is (near) zero or no candidate
/// remains.
pub fn find_most_unstable(
    com: GroundPoint,
    support_center: GroundPoint,
    snapshot: &JointSnapshot,
    excluded: &[JointRole],
) -> Option<Highlight> {
    let instability = com - support_center;
    if instability.norm_squared() <= f32::EPSILON {
        return None;
    }

    let mut best: Option<(JointRole, f32)> = None;
    for &role in &JointRole::ALL {
        if excluded.contains(&role) {
            continue;
        }
        let Some(position) = snapshot.position(role) else {
            continue;
        };
        let offset = ground_projection(&position) - support_center;
        let score = offset.dot(&instability);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((role, score)),
        }
    }

    best.map(|(joint, score)| Highlight {
        joint,
        parent: joint.parent(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn support_exclusions() -> Vec<JointRole> {
        JointRole::ALL
            .iter()
            .copied()
            .filter(|r| r.is_support())
            .collect()
    }

    #[test]
    fn test_picks_joint_furthest_toward_imbalance() {
        let mut s = JointSnapshot::new();
        s.set_position(JointRole::Hips, Point3::new(0.0, 90.0, 0.0));
        s.set_position(JointRole::Head, Point3::new(0.0, 170.0, 40.0));
        s.set_position(JointRole::LeftHand, Point3::new(-10.0, 80.0, -20.0));

        // COM displaced toward +z relative to the support center.
        let highlight = find_most_unstable(
            GroundPoint::new(0.0, 12.0),
            GroundPoint::new(0.0, 0.0),
            &s,
            &support_exclusions(),
        )
        .unwrap();
        assert_eq!(highlight.joint, JointRole::Head);
        assert_eq!(highlight.parent, Some(JointRole::Neck));
        assert!(highlight.score > 0.0);
    }

    #[test]
    fn test_excluded_roles_are_skipped() {
        let mut s = JointSnapshot::new();
        s.set_position(JointRole::RightToe, Point3::new(0.0, 0.0, 50.0));
        s.set_position(JointRole::Neck, Point3::new(0.0, 145.0, 10.0));

        let highlight = find_most_unstable(
            GroundPoint::new(0.0, 12.0),
            GroundPoint::new(0.0, 0.0),
            &s,
            &support_exclusions(),
        )
        .unwrap();
        // The toe is further toward the imbalance but is part of the base.
        assert_eq!(highlight.joint, JointRole::Neck);
    }

    #[test]
    fn test_tie_breaks_in_canonical_order() {
        let mut s = JointSnapshot::new();
        // Identical ground offsets: Spine comes before Neck in ALL.
        s.set_position(JointRole::Neck, Point3::new(0.0, 145.0, 10.0));
        s.set_position(JointRole::Spine, Point3::new(0.0, 110.0, 10.0));

        let highlight = find_most_unstable(
            GroundPoint::new(0.0, 5.0),
            GroundPoint::new(0.0, 0.0),
            &s,
            &[],
        )
        .unwrap();
        assert_eq!(highlight.joint, JointRole::Spine);
    }

    #[test]
    fn test_zero_instability_vector_yields_none() {
        let mut s = JointSnapshot::new();
        s.set_position(JointRole::Head, Point3::new(0.0, 170.0, 0.0));
        let center = GroundPoint::new(0.0, 0.0);
        assert!(find_most_unstable(center, center, &s, &[]).is_none());
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let snapshot = JointSnapshot::new();
        assert!(find_most_unstable(
            GroundPoint::new(5.0, 0.0),
            GroundPoint::new(0.0, 0.0),
            &snapshot,
            &[],
        )
        .is_none());
    }
}
