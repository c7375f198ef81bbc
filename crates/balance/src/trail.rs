//! Bounded FIFO of recent COM points for trail rendering.

use nalgebra::Point3;
use std::collections::VecDeque;

/// The last N COM points, oldest first.
///
/// Strict FIFO discipline: `push` appends and evicts the oldest point once
/// the buffer is full. The renderer maps iteration order (oldest to
/// newest) onto increasing opacity.
#[derive(Debug, Clone)]
pub struct ComTrail {
    points: VecDeque<Point3<f32>>,
    capacity: usize,
}

impl ComTrail {
    /// Creates a trail holding at most `capacity` points (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a COM point, evicting the oldest when full.
    pub fn push(&mut self, point: Point3<f32>) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f32>> {
        self.points.iter()
    }

    /// The most recent point.
    pub fn latest(&self) -> Option<&Point3<f32>> {
        self.points.back()
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no points are retained.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of retained points.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops all retained points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
