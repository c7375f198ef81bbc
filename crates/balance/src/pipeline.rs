//! Frame-driven recompute pipeline.
//!
//! Input collaborators mark a shared dirty flag on every pose or transform
//! edit; a periodic tick consumes the flag and runs exactly one full
//! analysis pass (COM → support polygon → stability → highlight). Any
//! number of edits landing between two ticks coalesce into a single
//! recompute, bounding the worst-case compute rate regardless of input
//! rate. Ticks are driven externally (timer, test harness), so the
//! pipeline itself is trivially unit-testable by firing ticks by hand.

use crate::com::{ComEstimate, ComEstimator};
use crate::highlight::{find_most_unstable, Highlight};
use crate::stability::{StabilityAnalyzer, StabilityResult, StabilityZone};
use crate::support::SupportPolygon;
use crate::trail::ComTrail;
use poise_core::config::BalanceConfig;
use poise_core::segment::SegmentTable;
use poise_core::skeleton::{JointRole, JointSnapshot};
use poise_core::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cloneable handle to the pipeline's dirty flag.
///
/// Single conceptual writer side (input handlers call [`mark`]) and a
/// single reader (the tick consumes it); the atomic makes the handoff safe
/// if the two ever live on different threads.
///
/// [`mark`]: DirtyFlag::mark
#[derive(Debug, Clone)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    fn new(initial: bool) -> Self {
        Self(Arc::new(AtomicBool::new(initial)))
    }

    /// Requests a recompute on the next tick.
    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true if a recompute is pending.
    pub fn is_marked(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Consumes the flag, returning whether it was set.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// One frame's complete analysis output.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceFrame {
    /// Whole-body COM estimate.
    pub com: ComEstimate,
    /// Base of support, when all four foot landmarks resolved.
    pub support: Option<SupportPolygon>,
    /// Stability margin and flag.
    pub stability: StabilityResult,
    /// Presentation zone derived from the stability result.
    pub zone: StabilityZone,
    /// Joint flagged for highlight; only present on unstable frames.
    pub highlight: Option<Highlight>,
    /// Wall-clock cost of the analysis pass in microseconds.
    pub compute_time_us: u64,
}

/// The full per-frame analysis pipeline behind a dirty flag.
pub struct BalancePipeline {
    estimator: ComEstimator,
    analyzer: StabilityAnalyzer,
    excluded: Vec<JointRole>,
    dirty: DirtyFlag,
    trail: ComTrail,
    last: Option<BalanceFrame>,
}

impl BalancePipeline {
    /// Builds a pipeline, validating the configuration and segment table.
    ///
    /// The flag starts marked so the first tick always produces a frame.
    pub fn new(config: BalanceConfig, table: SegmentTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            estimator: ComEstimator::new(table, config.body_mass)?,
            analyzer: StabilityAnalyzer::new(config.warning_margin),
            excluded: config.excluded,
            dirty: DirtyFlag::new(true),
            trail: ComTrail::new(config.trail_capacity),
            last: None,
        })
    }

    /// Default configuration over the Dempster table.
    pub fn with_defaults() -> Self {
        Self::new(BalanceConfig::default(), SegmentTable::dempster())
            .expect("default configuration is valid")
    }

    /// Hands out the input-side dirty flag handle.
    pub fn dirty(&self) -> DirtyFlag {
        self.dirty.clone()
    }

    /// One timer tick: recomputes if and only if the flag is marked.
    ///
    /// Returns `None` on a clean tick without touching the cached frame;
    /// [`last_frame`] still serves the previous result.
    ///
    /// [`last_frame`]: BalancePipeline::last_frame
    pub fn tick(&mut self, snapshot: &JointSnapshot) -> Option<&BalanceFrame> {
        if !self.dirty.take() {
            return None;
        }
        Some(self.recompute(snapshot))
    }

    /// Recomputes unconditionally, clearing any pending mark.
    pub fn force_tick(&mut self, snapshot: &JointSnapshot) -> &BalanceFrame {
        self.dirty.take();
        self.recompute(snapshot)
    }

    /// The most recent frame, if any tick has run.
    pub fn last_frame(&self) -> Option<&BalanceFrame> {
        self.last.as_ref()
    }

    /// The COM trail, oldest point first.
    pub fn trail(&self) -> &ComTrail {
        &self.trail
    }

    fn recompute(&mut self, snapshot: &JointSnapshot) -> &BalanceFrame {
        let start = Instant::now();

        let com = self.estimator.estimate(snapshot);
        let support = SupportPolygon::from_snapshot(snapshot);
        let stability = self.analyzer.analyze(com.ground, support.as_ref());
        let zone = self.analyzer.classify(&stability);

        // Highlights exist only while unstable over a real polygon;
        // returning to stable clears them. There is deliberately no
        // hysteresis here, so a COM hovering on the boundary may flicker
        // between states (known limitation of the model).
        let highlight = match (&support, stability.is_stable) {
            (Some(polygon), false) => {
                find_most_unstable(com.ground, polygon.center(), snapshot, &self.excluded)
            }
            _ => None,
        };

        self.trail.push(com.position);

        let frame = BalanceFrame {
            com,
            support,
            stability,
            zone,
            highlight,
            compute_time_us: start.elapsed().as_micros() as u64,
        };
        self.last.insert(frame)
    }
}
