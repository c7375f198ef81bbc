//! Joint roles, rig name mapping, and the per-frame joint snapshot.
//!
//! The analysis never touches a scene graph. An external skeleton
//! collaborator assembles a read-only [`JointSnapshot`] each frame (world
//! positions keyed by [`JointRole`]) and hands it to the pipeline. Rigs
//! with their own node naming are adapted through a [`JointMap`].

use nalgebra::{Point3, UnitQuaternion};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anatomical joints the balance analysis reads.
///
/// A typed role set decouples the algorithms from any one skeleton's naming
/// scheme; rig-specific node names are resolved through a [`JointMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointRole {
    Hips,
    Spine,
    Neck,
    Head,
    LeftShoulder,
    LeftElbow,
    LeftWrist,
    LeftHand,
    RightShoulder,
    RightElbow,
    RightWrist,
    RightHand,
    LeftUpLeg,
    LeftKnee,
    LeftFoot,
    LeftToe,
    RightUpLeg,
    RightKnee,
    RightFoot,
    RightToe,
}

impl JointRole {
    /// All roles in canonical order.
    ///
    /// Scans over joint candidates iterate this array, so any tie in a
    /// maximum search breaks toward the earlier role, deterministic
    /// regardless of how the snapshot stores its entries.
    pub const ALL: [JointRole; 20] = [
        JointRole::Hips,
        JointRole::Spine,
        JointRole::Neck,
        JointRole::Head,
        JointRole::LeftShoulder,
        JointRole::LeftElbow,
        JointRole::LeftWrist,
        JointRole::LeftHand,
        JointRole::RightShoulder,
        JointRole::RightElbow,
        JointRole::RightWrist,
        JointRole::RightHand,
        JointRole::LeftUpLeg,
        JointRole::LeftKnee,
        JointRole::LeftFoot,
        JointRole::LeftToe,
        JointRole::RightUpLeg,
        JointRole::RightKnee,
        JointRole::RightFoot,
        JointRole::RightToe,
    ];

    /// Canonical snake_case label, also the default rig node name.
    pub fn label(self) -> &'static str {
        match self {
            JointRole::Hips => "hips",
            JointRole::Spine => "spine",
            JointRole::Neck => "neck",
            JointRole::Head => "head",
            JointRole::LeftShoulder => "left_shoulder",
            JointRole::LeftElbow => "left_elbow",
            JointRole::LeftWrist => "left_wrist",
            JointRole::LeftHand => "left_hand",
            JointRole::RightShoulder => "right_shoulder",
            JointRole::RightElbow => "right_elbow",
            JointRole::RightWrist => "right_wrist",
            JointRole::RightHand => "right_hand",
            JointRole::LeftUpLeg => "left_up_leg",
            JointRole::LeftKnee => "left_knee",
            JointRole::LeftFoot => "left_foot",
            JointRole::LeftToe => "left_toe",
            JointRole::RightUpLeg => "right_up_leg",
            JointRole::RightKnee => "right_knee",
            JointRole::RightFoot => "right_foot",
            JointRole::RightToe => "right_toe",
        }
    }

    /// The immediate proximal neighbor, i.e. the other end of the segment
    /// terminating at this joint. `Hips` is the root and has none.
    pub fn parent(self) -> Option<JointRole> {
        match self {
            JointRole::Hips => None,
            JointRole::Spine => Some(JointRole::Hips),
            JointRole::Neck => Some(JointRole::Spine),
            JointRole::Head => Some(JointRole::Neck),
            JointRole::LeftShoulder => Some(JointRole::Spine),
            JointRole::LeftElbow => Some(JointRole::LeftShoulder),
            JointRole::LeftWrist => Some(JointRole::LeftElbow),
            JointRole::LeftHand => Some(JointRole::LeftWrist),
            JointRole::RightShoulder => Some(JointRole::Spine),
            JointRole::RightElbow => Some(JointRole::RightShoulder),
            JointRole::RightWrist => Some(JointRole::RightElbow),
            JointRole::RightHand => Some(JointRole::RightWrist),
            JointRole::LeftUpLeg => Some(JointRole::Hips),
            JointRole::LeftKnee => Some(JointRole::LeftUpLeg),
            JointRole::LeftFoot => Some(JointRole::LeftKnee),
            JointRole::LeftToe => Some(JointRole::LeftFoot),
            JointRole::RightUpLeg => Some(JointRole::Hips),
            JointRole::RightKnee => Some(JointRole::RightUpLeg),
            JointRole::RightFoot => Some(JointRole::RightKnee),
            JointRole::RightToe => Some(JointRole::RightFoot),
        }
    }

    /// Returns true for the foot/toe landmarks that form the base of
    /// support. These are excluded from instability-highlight scans.
    pub fn is_support(self) -> bool {
        matches!(
            self,
            JointRole::LeftFoot | JointRole::LeftToe | JointRole::RightFoot | JointRole::RightToe
        )
    }
}

/// Maps each [`JointRole`] to a skeleton-specific node name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointMap {
    names: HashMap<JointRole, String>,
}

impl Default for JointMap {
    /// Canonical snake_case naming (`"hips"`, `"left_foot"`, ...).
    fn default() -> Self {
        let names = JointRole::ALL
            .iter()
            .map(|&role| (role, role.label().to_string()))
            .collect();
        Self { names }
    }
}

impl JointMap {
    /// Creates the default canonical mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for Mixamo-style rigs (`"mixamorig:Hips"`, ...).
    pub fn mixamo() -> Self {
        let mut map = Self::default();
        let entries = [
            (JointRole::Hips, "mixamorig:Hips"),
            (JointRole::Spine, "mixamorig:Spine"),
            (JointRole::Neck, "mixamorig:Neck"),
            (JointRole::Head, "mixamorig:Head"),
            (JointRole::LeftShoulder, "mixamorig:LeftArm"),
            (JointRole::LeftElbow, "mixamorig:LeftForeArm"),
            (JointRole::LeftWrist, "mixamorig:LeftHand"),
            (JointRole::LeftHand, "mixamorig:LeftHandMiddle1"),
            (JointRole::RightShoulder, "mixamorig:RightArm"),
            (JointRole::RightElbow, "mixamorig:RightForeArm"),
            (JointRole::RightWrist, "mixamorig:RightHand"),
            (JointRole::RightHand, "mixamorig:RightHandMiddle1"),
            (JointRole::LeftUpLeg, "mixamorig:LeftUpLeg"),
            (JointRole::LeftKnee, "mixamorig:LeftLeg"),
            (JointRole::LeftFoot, "mixamorig:LeftFoot"),
            (JointRole::LeftToe, "mixamorig:LeftToeBase"),
            (JointRole::RightUpLeg, "mixamorig:RightUpLeg"),
            (JointRole::RightKnee, "mixamorig:RightLeg"),
            (JointRole::RightFoot, "mixamorig:RightFoot"),
            (JointRole::RightToe, "mixamorig:RightToeBase"),
        ];
        for (role, name) in entries {
            map.names.insert(role, name.to_string());
        }
        map
    }

    /// Overrides the node name for a single role.
    pub fn with_name(mut self, role: JointRole, name: impl Into<String>) -> Self {
        self.names.insert(role, name.into());
        self
    }

    /// Returns the node name mapped to a role.
    pub fn name(&self, role: JointRole) -> &str {
        self.names
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.label())
    }

    /// Resolves a rig node name back to its role, if the map knows it.
    pub fn resolve(&self, name: &str) -> Option<JointRole> {
        self.names
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(&role, _)| role)
    }
}

/// A per-frame read-only snapshot of joint world transforms.
///
/// Produced fresh every frame by the skeleton collaborator; the analysis
/// only reads it. Rotations are carried for pose-application collaborators
/// and are not consumed by the balance math.
#[derive(Debug, Clone, Default)]
pub struct JointSnapshot {
    positions: HashMap<JointRole, Point3<f32>>,
    rotations: HashMap<JointRole, UnitQuaternion<f32>>,
}

impl JointSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from raw `(node name, position)` pairs, resolving
    /// names through the map. Nodes the map does not know are ignored.
    pub fn from_named<'a, I>(named: I, map: &JointMap) -> Self
    where
        I: IntoIterator<Item = (&'a str, Point3<f32>)>,
    {
        let mut snapshot = Self::new();
        for (name, position) in named {
            match map.resolve(name) {
                Some(role) => {
                    snapshot.positions.insert(role, position);
                }
                None => log::trace!("ignoring unmapped node `{name}`"),
            }
        }
        snapshot
    }

    /// Records a joint's world position.
    pub fn set_position(&mut self, role: JointRole, position: Point3<f32>) {
        self.positions.insert(role, position);
    }

    /// Records a joint's local rotation.
    pub fn set_rotation(&mut self, role: JointRole, rotation: UnitQuaternion<f32>) {
        self.rotations.insert(role, rotation);
    }

    /// The joint's world position, if present this frame.
    pub fn position(&self, role: JointRole) -> Option<Point3<f32>> {
        self.positions.get(&role).copied()
    }

    /// The joint's local rotation, if present this frame.
    pub fn rotation(&self, role: JointRole) -> Option<UnitQuaternion<f32>> {
        self.rotations.get(&role).copied()
    }

    /// Iterates over all recorded positions (unspecified order).
    pub fn positions(&self) -> impl Iterator<Item = (JointRole, Point3<f32>)> + '_ {
        self.positions.iter().map(|(&role, &p)| (role, p))
    }

    /// Returns true if the role has a position this frame.
    pub fn contains(&self, role: JointRole) -> bool {
        self.positions.contains_key(&role)
    }

    /// Number of joints with positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no joint has a position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_covers_all_roles() {
        assert_eq!(JointRole::ALL.len(), 20);
        // Labels are unique.
        let mut labels: Vec<_> = JointRole::ALL.iter().map(|r| r.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 20);
    }

    #[test]
    fn test_parent_chain_reaches_root() {
        let mut role = JointRole::RightToe;
        let mut hops = 0;
        while let Some(parent) = role.parent() {
            role = parent;
            hops += 1;
            assert!(hops < 20, "parent chain must terminate");
        }
        assert_eq!(role, JointRole::Hips);
    }

    #[test]
    fn test_support_roles() {
        assert!(JointRole::LeftFoot.is_support());
        assert!(JointRole::RightToe.is_support());
        assert!(!JointRole::Head.is_support());
        assert!(!JointRole::LeftKnee.is_support());
    }

    #[test]
    fn test_joint_map_resolve_round_trip() {
        let map = JointMap::mixamo();
        for &role in &JointRole::ALL {
            assert_eq!(map.resolve(map.name(role)), Some(role));
        }
        assert_eq!(map.resolve("no_such_node"), None);
    }

    #[test]
    fn test_joint_map_override() {
        let map = JointMap::new().with_name(JointRole::Hips, "pelvis");
        assert_eq!(map.name(JointRole::Hips), "pelvis");
        assert_eq!(map.resolve("pelvis"), Some(JointRole::Hips));
        assert_eq!(map.resolve("hips"), None);
    }

    #[test]
    fn test_snapshot_from_named_ignores_unknown() {
        let map = JointMap::default();
        let snapshot = JointSnapshot::from_named(
            [
                ("hips", Point3::new(0.0, 90.0, 0.0)),
                ("prop_bone", Point3::new(1.0, 1.0, 1.0)),
            ],
            &map,
        );
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains(JointRole::Hips));
    }
}
