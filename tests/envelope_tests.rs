mod support;

use gearshaper::{
    errors::GearError,
    float_types::{Real, TAU},
    gear::{
        GearType, QualityPreset,
        cutter::CutterProfile,
        demo::cutout_demo,
        envelope::{single_tooth, sweep_placements, tooth_cutout},
        smoothing::{SmoothingMode, classify_corners, smooth_corners},
    },
};
use nalgebra::Point2;

#[test]
fn cutter_corners_follow_the_rack_geometry() {
    let gear = support::default_wheel(30, 0.0);
    let cutter = CutterProfile::for_gear(&gear);
    let derived = gear.derived();
    let (sin_a, cos_a) = (20.0 as Real).to_radians().sin_cos();

    assert!(support::approx_eq(cutter.tooth_width, 4.0, 1e-12));
    assert!(support::approx_eq(cutter.depth, derived.addendum + 0.05, 1e-12));
    assert!(support::approx_eq(cutter.outside_length, 3.0 * derived.addendum, 1e-12));
    assert!(support::approx_eq(cutter.half_backlash_offset, 0.025 / cos_a, 1e-12));

    let lower_x = 2.0 + 0.025 / cos_a - cutter.depth * sin_a;
    assert!(support::approx_eq(cutter.lower_right[0], lower_x, 1e-12));
    assert!(support::approx_eq(
        cutter.lower_right[1],
        derived.pitch_radius - cutter.depth,
        1e-12
    ));
    assert!(support::approx_eq(
        cutter.upper_right[1],
        derived.pitch_radius + cutter.outside_length,
        1e-12
    ));

    // Symmetric about the y axis, anchor first.
    assert_eq!(cutter.lower_left, [-cutter.lower_right[0], cutter.lower_right[1]]);
    assert_eq!(cutter.upper_left, [-cutter.upper_right[0], cutter.upper_right[1]]);
    assert_eq!(cutter.corners()[0], cutter.lower_left);

    let diagnostics = cutter.diagnostics(&gear);
    assert_eq!(diagnostics.gear_type, GearType::External);
    assert_eq!(diagnostics.step_count, 0);
}

#[test]
fn sweep_terminates_within_the_step_bound() {
    for teeth in [8, 15, 30, 60] {
        for quality in [QualityPreset::Draft, QualityPreset::Normal, QualityPreset::High] {
            let gear = support::default_wheel(teeth, 0.0);
            let gear = gearshaper::gear::Gear::new(gearshaper::gear::GearSpec {
                quality: quality.settings(),
                ..*gear.spec()
            })
            .unwrap();
            let cutter = CutterProfile::for_gear(&gear);
            let sweep = sweep_placements(&gear, &cutter).unwrap();
            let derived = gear.derived();

            let bound = ((derived.outer_radius / derived.pitch_radius).to_degrees()
                / sweep.angle_step_size)
                .ceil() as usize
                + 2;
            assert!(sweep.step_count >= 1);
            assert!(
                sweep.step_count <= bound,
                "{teeth} teeth, {quality:?}: {} steps > {bound}",
                sweep.step_count
            );
            // Every step after the first adds a mirrored placement.
            assert_eq!(sweep.placements.len(), 2 * sweep.step_count - 1);

            // The step that stopped the sweep has the anchor outside the blank.
            let anchor = Point2::new(cutter.lower_left[0], cutter.lower_left[1]);
            let last = sweep.placements[sweep.placements.len() - 1].mirrored();
            assert!(last.matrix().transform_point(&anchor).coords.norm() <= derived.outer_radius);
        }
    }
}

#[test]
fn sweep_step_limit_saturates_for_huge_backlash() {
    let spec = gearshaper::gear::GearSpec::builder()
        .tooth_count(20)
        .circular_pitch(8.0)
        .backlash(1e300)
        .build()
        .unwrap();
    let gear = gearshaper::gear::Gear::new(spec).unwrap();
    let cutter = CutterProfile::for_gear(&gear);
    // The anchor starts far outside the blank, so the sweep stops at once.
    let sweep = sweep_placements(&gear, &cutter).unwrap();
    assert_eq!(sweep.step_count, 0);
    assert!(sweep.placements.is_empty());
}

#[test]
fn sweep_rejects_racks_before_looping() {
    let rack = support::plain_gear(0, QualityPreset::Draft);
    let cutter = CutterProfile::for_gear(&rack);
    let err = sweep_placements(&rack, &cutter).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(err, GearError::InvalidParameter { name: "tooth_count", .. }));
}

#[test]
fn tooth_cutout_is_a_single_region_inside_the_sector() {
    let gear = support::default_wheel(20, 0.0);
    let cutout = tooth_cutout(&gear).unwrap();
    assert_eq!(cutout.shape.polygon_count(), 1);
    assert_eq!(cutout.shape.hole_count(), 0);
    assert_eq!(cutout.diagnostics.step_count, {
        let cutter = CutterProfile::for_gear(&gear);
        sweep_placements(&gear, &cutter).unwrap().step_count
    });
    assert!(support::approx_eq(cutout.diagnostics.angle_step_size, 6.0, 1e-12));

    let tooth = single_tooth(&gear).unwrap();
    let derived = gear.derived();
    let sector_area = derived.outer_radius.powi(2) * TAU / 20.0 / 2.0;
    assert!(tooth.shape.area() > 0.0);
    assert!(tooth.shape.area() < sector_area);
    assert!(support::max_radius(&tooth.shape) <= derived.outer_radius + 1e-6);
}

#[test]
fn smoothing_removes_notches_and_is_idempotent() {
    // A 36-gon with a shallow notch between every pair of corners.
    let mut scalloped = Vec::new();
    for i in 0..36 {
        let corner = (i as Real * 10.0).to_radians();
        let notch = (i as Real * 10.0 + 5.0).to_radians();
        scalloped.push([10.0 * corner.cos(), 10.0 * corner.sin()]);
        scalloped.push([9.9 * notch.cos(), 9.9 * notch.sin()]);
    }
    let convex = classify_corners(&scalloped);
    assert!(convex.iter().step_by(2).all(|c| *c));
    assert!(convex.iter().skip(1).step_by(2).all(|c| !*c));

    let once = smooth_corners(&scalloped, SmoothingMode::RemoveSingleConcave);
    assert_eq!(once.len(), 36);
    let twice = smooth_corners(&once, SmoothingMode::RemoveSingleConcave);
    assert_eq!(once, twice);

    // Traced the other way round, the notches are isolated convex corners.
    let mut reversed = scalloped.clone();
    reversed.reverse();
    let once = smooth_corners(&reversed, SmoothingMode::RemoveSingleConvex);
    assert_eq!(once.len(), 36);
    assert_eq!(smooth_corners(&once, SmoothingMode::RemoveSingleConvex), once);
}

#[test]
fn smoothing_does_not_cascade() {
    // Two adjacent notches: neither is isolated, so nothing is removed.
    let outline = [
        [0.0, 0.0],
        [1.0, 0.1],
        [2.0, 0.1],
        [3.0, 0.0],
        [3.0, 3.0],
        [0.0, 3.0],
    ];
    assert_eq!(
        classify_corners(&outline),
        vec![true, false, false, true, true, true]
    );
    assert_eq!(
        smooth_corners(&outline, SmoothingMode::RemoveSingleConcave),
        outline.to_vec()
    );
}

#[test]
fn cutout_demo_draws_external_gears_only() {
    let gear = support::plain_gear(8, QualityPreset::Draft);
    let demo = cutout_demo(&gear).unwrap();
    assert!(!demo.is_empty());
    assert!(support::max_radius(&demo) > gear.derived().outer_radius);

    let rack = support::plain_gear(0, QualityPreset::Draft);
    assert!(cutout_demo(&rack).is_err());
}
