//! # Poise Balance
//!
//! Balance analysis for articulated humanoid skeletons.
//!
//! This crate turns a per-frame joint snapshot into the quantities a pose
//! visualizer renders: the whole-body center of mass, the base-of-support
//! polygon under the feet, a stability margin with a stable/unstable flag,
//! and the body segment most displaced toward the imbalance.
//!
//! ## Components
//!
//! - [`ComEstimator`] - weighted-segment COM estimation
//! - [`SupportPolygon`] - base of support from the foot landmarks
//! - [`StabilityAnalyzer`] - point-in-polygon and edge-distance analysis
//! - [`find_most_unstable`] - instability-direction segment highlighting
//! - [`ComTrail`] - bounded FIFO of recent COM points
//! - [`BalancePipeline`] - the full pass behind a coalescing dirty flag
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Point3;
//! use poise_balance::{BalancePipeline, JointRole, JointSnapshot};
//!
//! let mut pipeline = BalancePipeline::with_defaults();
//!
//! let mut snapshot = JointSnapshot::new();
//! snapshot.set_position(JointRole::Hips, Point3::new(0.0, 90.0, 0.0));
//! snapshot.set_position(JointRole::Neck, Point3::new(0.0, 145.0, 0.0));
//!
//! let frame = pipeline.force_tick(&snapshot);
//! assert!(frame.com.segments_used >= 1); // the trunk resolved
//! assert!(!frame.stability.supported); // no foot landmarks yet
//! ```

pub mod com;
pub mod highlight;
pub mod pipeline;
pub mod stability;
pub mod support;
pub mod trail;

#[cfg(test)]
mod testing;

// Re-exports
pub use com::{ComEstimate, ComEstimator};
pub use highlight::{find_most_unstable, Highlight};
pub use pipeline::{BalanceFrame, BalancePipeline, DirtyFlag};
pub use stability::{StabilityAnalyzer, StabilityResult, StabilityZone};
pub use support::SupportPolygon;
pub use trail::ComTrail;
pub use poise_core::{
    BalanceConfig, Error, GroundPoint, JointMap, JointRole, JointSnapshot, Result,
    SegmentDefinition, SegmentTable,
};
