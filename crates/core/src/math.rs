//! Ground-plane math primitives shared by the analysis crates.
//!
//! Balance analysis happens on the horizontal plane: world positions are
//! projected by dropping the vertical (y) axis, and the remaining (x, z)
//! pair is treated as a 2D point. The primitives here are deliberately
//! small: segment distance with a clamped projection parameter, and the
//! classic even-odd ray-casting containment test.

use nalgebra::{Point2, Point3};

/// A point on the horizontal (ground) plane, stored as (world x, world z).
pub type GroundPoint = Point2<f32>;

/// Projects a world-space point onto the ground plane by dropping the
/// vertical (y) axis.
#[inline]
pub fn ground_projection(p: &Point3<f32>) -> GroundPoint {
    GroundPoint::new(p.x, p.z)
}

/// Distance from `p` to the closest point on segment `ab`.
///
/// The projection parameter is clamped to [0, 1] so the distance is to the
/// segment itself, not the infinite line through it. A degenerate segment
/// (`a == b`) degrades to plain point distance.
pub fn segment_distance(p: GroundPoint, a: GroundPoint, b: GroundPoint) -> f32 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).norm()
}

/// Even-odd ray-casting containment test over a closed ring.
///
/// Casts a ray toward +x from `p` and counts edge crossings; an odd count
/// means inside. Runs in O(n) over the ring's edges. Rings with fewer than
/// three vertices contain nothing.
pub fn ring_contains(ring: &[GroundPoint], p: GroundPoint) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (vi, vj) = (ring[i], ring[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = vi.x + (p.y - vi.y) / (vj.y - vi.y) * (vj.x - vi.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
