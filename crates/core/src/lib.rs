//! # Poise Core
//!
//! Core types for the poise humanoid balance analysis engine.
//!
//! This crate provides the foundational types shared by the analysis
//! crates: ground-plane math primitives, the typed joint-role model with
//! rig name mapping, the per-frame joint snapshot, the anthropometric
//! segment table, runtime configuration, and the error type.
//!
//! ## Core Components
//!
//! - **Math primitives**: [`GroundPoint`], [`ground_projection`],
//!   [`segment_distance`], [`ring_contains`]
//! - **Skeleton model**: [`JointRole`], [`JointMap`], [`JointSnapshot`]
//! - **Segment table**: [`SegmentTable`], [`SegmentDefinition`]
//! - **Configuration**: [`BalanceConfig`]
//!
//! ## Configuration
//!
//! Use [`BalanceConfig`] to configure the analysis:
//!
//! ```rust
//! use poise_core::BalanceConfig;
//!
//! let config = BalanceConfig::new()
//!     .with_body_mass(52.2)
//!     .with_warning_margin(10.0)
//!     .with_trail_capacity(50);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod math;
pub mod segment;
pub mod skeleton;

// Re-exports
pub use config::{
    BalanceConfig, DEFAULT_BODY_MASS, DEFAULT_TRAIL_CAPACITY, DEFAULT_WARNING_MARGIN,
};
pub use error::{Error, Result};
pub use math::{ground_projection, ring_contains, segment_distance, GroundPoint};
pub use segment::{SegmentDefinition, SegmentTable, MASS_SUM_TOLERANCE};
pub use skeleton::{JointMap, JointRole, JointSnapshot};
