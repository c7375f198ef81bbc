//! Shared test fixtures.

use nalgebra::Point3;
use poise_core::skeleton::{JointRole, JointSnapshot};

/// A symmetric standing pose: ground at y = 0, head at y = 170, feet at
/// x = ±15 as in the standard layout. Mirrored left/right, facing +z.
pub fn standing_snapshot() -> JointSnapshot {
    let mut s = JointSnapshot::new();
    s.set_position(JointRole::Hips, Point3::new(0.0, 90.0, 0.0));
    s.set_position(JointRole::Spine, Point3::new(0.0, 110.0, 0.0));
    s.set_position(JointRole::Neck, Point3::new(0.0, 145.0, 0.0));
    s.set_position(JointRole::Head, Point3::new(0.0, 170.0, 0.0));

    s.set_position(JointRole::LeftShoulder, Point3::new(-20.0, 140.0, 0.0));
    s.set_position(JointRole::LeftElbow, Point3::new(-22.0, 112.0, 0.0));
    s.set_position(JointRole::LeftWrist, Point3::new(-23.0, 86.0, 0.0));
    s.set_position(JointRole::LeftHand, Point3::new(-23.0, 78.0, 0.0));
    s.set_position(JointRole::RightShoulder, Point3::new(20.0, 140.0, 0.0));
    s.set_position(JointRole::RightElbow, Point3::new(22.0, 112.0, 0.0));
    s.set_position(JointRole::RightWrist, Point3::new(23.0, 86.0, 0.0));
    s.set_position(JointRole::RightHand, Point3::new(23.0, 78.0, 0.0));

    s.set_position(JointRole::LeftUpLeg, Point3::new(-10.0, 90.0, 0.0));
    s.set_position(JointRole::LeftKnee, Point3::new(-11.0, 48.0, 0.0));
    s.set_position(JointRole::LeftFoot, Point3::new(-15.0, 0.0, -6.0));
    s.set_position(JointRole::LeftToe, Point3::new(-15.0, 0.0, 14.0));
    s.set_position(JointRole::RightUpLeg, Point3::new(10.0, 90.0, 0.0));
    s.set_position(JointRole::RightKnee, Point3::new(11.0, 48.0, 0.0));
    s.set_position(JointRole::RightFoot, Point3::new(15.0, 0.0, -6.0));
    s.set_position(JointRole::RightToe, Point3::new(15.0, 0.0, 14.0));
    s
}

/// The standing pose with one joint removed.
pub fn standing_snapshot_without(role: JointRole) -> JointSnapshot {
    let full = standing_snapshot();
    let mut s = JointSnapshot::new();
    for (r, p) in full.positions() {
        if r != role {
            s.set_position(r, p);
        }
    }
    s
}
