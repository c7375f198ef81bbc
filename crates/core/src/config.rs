//! Runtime configuration for the balance pipeline.

use crate::error::{Error, Result};
use crate::skeleton::JointRole;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default total body mass in kilograms.
pub const DEFAULT_BODY_MASS: f32 = 52.2;

/// Default stability margin (ground-plane units) below which a stable pose
/// is reported as near the edge of support.
pub const DEFAULT_WARNING_MARGIN: f32 = 10.0;

/// Default number of COM points retained for trail rendering.
pub const DEFAULT_TRAIL_CAPACITY: usize = 50;

/// Startup configuration, fixed for the life of the pipeline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceConfig {
    /// Total body mass in kilograms.
    pub body_mass: f32,

    /// Margin threshold separating the "good" and "near edge" zones.
    pub warning_margin: f32,

    /// Capacity of the COM trail buffer.
    pub trail_capacity: usize,

    /// Joints excluded from the instability-highlight scan. Defaults to the
    /// foot/toe landmarks: they form the base of support, so they are never
    /// the imbalance indicator.
    pub excluded: Vec<JointRole>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            body_mass: DEFAULT_BODY_MASS,
            warning_margin: DEFAULT_WARNING_MARGIN,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            excluded: JointRole::ALL
                .iter()
                .copied()
                .filter(|r| r.is_support())
                .collect(),
        }
    }
}

impl BalanceConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total body mass in kilograms.
    pub fn with_body_mass(mut self, kg: f32) -> Self {
        self.body_mass = kg;
        self
    }

    /// Sets the near-edge warning margin.
    pub fn with_warning_margin(mut self, margin: f32) -> Self {
        self.warning_margin = margin;
        self
    }

    /// Sets the COM trail capacity.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    /// Replaces the set of joints excluded from highlighting.
    pub fn with_excluded(mut self, excluded: Vec<JointRole>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.body_mass.is_finite() || self.body_mass <= 0.0 {
            return Err(Error::Config(format!(
                "body mass must be positive and finite, got {}",
                self.body_mass
            )));
        }
        if !self.warning_margin.is_finite() || self.warning_margin < 0.0 {
            return Err(Error::Config(format!(
                "warning margin must be non-negative, got {}",
                self.warning_margin
            )));
        }
        if self.trail_capacity == 0 {
            return Err(Error::Config("trail capacity must be at least 1".into()));
        }
        Ok(())
    }
}
