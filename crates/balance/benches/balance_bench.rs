//! Benchmarks for the per-frame balance analysis pass.
//!
//! The pipeline runs inside an interactive tick budget, so the full pass
//! and its two dominant stages are measured separately.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use poise_balance::{
    BalancePipeline, ComEstimator, JointRole, JointSnapshot, SegmentTable, StabilityAnalyzer,
    SupportPolygon,
};

fn standing_snapshot() -> JointSnapshot {
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

fn bench_full_pass(c: &mut Criterion) {
    let snapshot = standing_snapshot();
    let mut pipeline = BalancePipeline::with_defaults();

    c.bench_function("pipeline_force_tick", |b| {
        b.iter(|| {
            let frame = pipeline.force_tick(black_box(&snapshot));
            black_box(frame.stability.margin)
        })
    });
}

fn bench_com_estimate(c: &mut Criterion) {
    let snapshot = standing_snapshot();
    let estimator = ComEstimator::new(SegmentTable::dempster(), 52.2).unwrap();

    c.bench_function("com_estimate", |b| {
        b.iter(|| black_box(estimator.estimate(black_box(&snapshot))))
    });
}

fn bench_stability_analyze(c: &mut Criterion) {
    let snapshot = standing_snapshot();
    let polygon = SupportPolygon::from_snapshot(&snapshot).unwrap();
    let analyzer = StabilityAnalyzer::default();
    let com = poise_core::GroundPoint::new(0.0, 2.0);

    c.bench_function("stability_analyze", |b| {
        b.iter(|| black_box(analyzer.analyze(black_box(com), Some(black_box(&polygon)))))
    });
}

criterion_group!(
    benches,
    bench_full_pass,
    bench_com_estimate,
    bench_stability_analyze
);
criterion_main!(benches);
