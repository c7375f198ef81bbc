//! Anthropometric body segment definitions.
//!
//! The body is modeled as 14 rigid segments, each bounded by a proximal and
//! a distal joint and carrying a fixed fraction of total body mass with its
//! local center of mass at a fixed fractional position along the segment.
//! The default values are Dempster's published coefficients; they are
//! domain constants, not tuning knobs.

use crate::error::{Error, Result};
use crate::skeleton::JointRole;
use nalgebra::Point3;

/// Allowed deviation of the mass-fraction sum from 1.0.
pub const MASS_SUM_TOLERANCE: f32 = 0.01;

/// One rigid body segment between two joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDefinition {
    /// Segment name, e.g. `"left_forearm"`.
    pub name: &'static str,
    /// Joint at the segment's proximal end.
    pub proximal: JointRole,
    /// Joint at the segment's distal end.
    pub distal: JointRole,
    /// Fraction of total body mass carried by this segment (0-1).
    pub mass_fraction: f32,
    /// Fractional position of the segment's local COM, measured from the
    /// proximal joint toward the distal joint (0-1).
    pub com_fraction: f32,
}

impl SegmentDefinition {
    /// Interpolates the segment's local COM between its joint positions.
    pub fn point_on(&self, proximal: &Point3<f32>, distal: &Point3<f32>) -> Point3<f32> {
        proximal + (distal - proximal) * self.com_fraction
    }
}

/// The fixed set of segments used by COM estimation.
///
/// Long-lived, shared, immutable configuration: built once at startup and
/// read every frame. Injected rather than global so tests can substitute
/// their own tables.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    segments: Vec<SegmentDefinition>,
}

impl SegmentTable {
    /// Builds a table from arbitrary definitions. Call [`validate`] before
    /// feeding it to an estimator.
    ///
    /// [`validate`]: SegmentTable::validate
    pub fn new(segments: Vec<SegmentDefinition>) -> Self {
        Self { segments }
    }

    /// The standard 14-segment table with Dempster mass coefficients.
    ///
    /// Mass fractions sum to 1.0: head 8.1%, trunk 49.7%, and per side
    /// upper arm 2.8%, forearm 1.6%, hand 0.6%, thigh 10.0%, shank 4.65%,
    /// foot 1.45%.
    pub fn dempster() -> Self {
        use JointRole::*;
        Self::new(vec![
            SegmentDefinition {
                name: "trunk",
                proximal: Hips,
                distal: Neck,
                mass_fraction: 0.497,
                com_fraction: 0.50,
            },
            SegmentDefinition {
                name: "head",
                proximal: Neck,
                distal: Head,
                mass_fraction: 0.081,
                com_fraction: 0.50,
            },
            SegmentDefinition {
                name: "left_upper_arm",
                proximal: LeftShoulder,
                distal: LeftElbow,
                mass_fraction: 0.028,
                com_fraction: 0.436,
            },
            SegmentDefinition {
                name: "right_upper_arm",
                proximal: RightShoulder,
                distal: RightElbow,
                mass_fraction: 0.028,
                com_fraction: 0.436,
            },
            SegmentDefinition {
                name: "left_forearm",
                proximal: LeftElbow,
                distal: LeftWrist,
                mass_fraction: 0.016,
                com_fraction: 0.430,
            },
            SegmentDefinition {
                name: "right_forearm",
                proximal: RightElbow,
                distal: RightWrist,
                mass_fraction: 0.016,
                com_fraction: 0.430,
            },
            SegmentDefinition {
                name: "left_hand",
                proximal: LeftWrist,
                distal: LeftHand,
                mass_fraction: 0.006,
                com_fraction: 0.506,
            },
            SegmentDefinition {
                name: "right_hand",
                proximal: RightWrist,
                distal: RightHand,
                mass_fraction: 0.006,
                com_fraction: 0.506,
            },
            SegmentDefinition {
                name: "left_thigh",
                proximal: LeftUpLeg,
                distal: LeftKnee,
                mass_fraction: 0.100,
                com_fraction: 0.433,
            },
            SegmentDefinition {
                name: "right_thigh",
                proximal: RightUpLeg,
                distal: RightKnee,
                mass_fraction: 0.100,
                com_fraction: 0.433,
            },
            SegmentDefinition {
                name: "left_shank",
                proximal: LeftKnee,
                distal: LeftFoot,
                mass_fraction: 0.0465,
                com_fraction: 0.433,
            },
            SegmentDefinition {
                name: "right_shank",
                proximal: RightKnee,
                distal: RightFoot,
                mass_fraction: 0.0465,
                com_fraction: 0.433,
            },
            SegmentDefinition {
                name: "left_foot",
                proximal: LeftFoot,
                distal: LeftToe,
                mass_fraction: 0.0145,
                com_fraction: 0.50,
            },
            SegmentDefinition {
                name: "right_foot",
                proximal: RightFoot,
                distal: RightToe,
                mass_fraction: 0.0145,
                com_fraction: 0.50,
            },
        ])
    }

    /// Validates fraction ranges and the mass-fraction sum.
    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(Error::SegmentTable { sum: 0.0 });
        }
        for seg in &self.segments {
            if !(0.0..=1.0).contains(&seg.mass_fraction) || !seg.mass_fraction.is_finite() {
                return Err(Error::Fraction {
                    segment: seg.name,
                    value: seg.mass_fraction,
                });
            }
            if !(0.0..=1.0).contains(&seg.com_fraction) || !seg.com_fraction.is_finite() {
                return Err(Error::Fraction {
                    segment: seg.name,
                    value: seg.com_fraction,
                });
            }
        }
        let sum: f32 = self.segments.iter().map(|s| s.mass_fraction).sum();
        if (sum - 1.0).abs() > MASS_SUM_TOLERANCE {
            return Err(Error::SegmentTable { sum });
        }
        Ok(())
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the table has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segment definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentDefinition> {
        self.segments.iter()
    }

    /// Looks up a segment by name.
    pub fn get(&self, name: &str) -> Option<&SegmentDefinition> {
        self.segments.iter().find(|s| s.name == name)
    }
}

impl Default for SegmentTable {
    fn default() -> Self {
        Self::dempster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dempster_table_is_valid() {
        let table = SegmentTable::dempster();
        assert_eq!(table.len(), 14);
        table.validate().expect("published table must validate");

        let sum: f32 = table.iter().map(|s| s.mass_fraction).sum();
        assert!((sum - 1.0).abs() < MASS_SUM_TOLERANCE);
    }

    #[test]
    fn test_point_on_interpolates() {
        let table = SegmentTable::dempster();
        let thigh = table.get("left_thigh").unwrap();
        let proximal = Point3::new(0.0, 90.0, 0.0);
        let distal = Point3::new(0.0, 50.0, 0.0);
        let com = thigh.point_on(&proximal, &distal);
        assert!((com.y - (90.0 - 0.433 * 40.0)).abs() < 1e-4);
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let mut segments: Vec<_> = SegmentTable::dempster().iter().copied().collect();
        segments.pop();
        let table = SegmentTable::new(segments);
        assert!(matches!(
            table.validate(),
            Err(Error::SegmentTable { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_fraction() {
        let mut segments: Vec<_> = SegmentTable::dempster().iter().copied().collect();
        segments[0].com_fraction = 1.5;
        let table = SegmentTable::new(segments);
        assert!(matches!(table.validate(), Err(Error::Fraction { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let table = SegmentTable::new(Vec::new());
        assert!(table.validate().is_err());
    }
}
