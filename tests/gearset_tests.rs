mod support;

use gearshaper::{
    errors::GearError,
    gear::QualityPreset,
    gearset::{GearPair, ShowOption},
    traits::CSGOps,
};

#[test]
fn show_mask_bits() {
    assert_eq!(ShowOption::from_mask(1), Ok(ShowOption::Gear1));
    assert_eq!(ShowOption::from_mask(2), Ok(ShowOption::Gear2));
    assert_eq!(ShowOption::from_mask(3), Ok(ShowOption::Both));
    // Bits above the first two are ignored.
    assert_eq!(ShowOption::from_mask(5), Ok(ShowOption::Gear1));
    assert_eq!(ShowOption::from_mask(0), Err(GearError::EmptySelection(0)));
    assert_eq!(ShowOption::try_from(4u8), Err(GearError::EmptySelection(4)));

    assert!(ShowOption::Both.shows_gear1() && ShowOption::Both.shows_gear2());
    assert!(!ShowOption::Gear2.shows_gear1());
}

#[test]
fn center_distance_uses_signed_pitch_radii() {
    let wheel = support::plain_gear(30, QualityPreset::Draft);
    let pinion = support::plain_gear(8, QualityPreset::Draft);
    let ring = support::plain_gear(-30, QualityPreset::Draft);
    let rack = support::plain_gear(0, QualityPreset::Draft);

    let r_wheel = wheel.derived().pitch_radius;
    let r_pinion = pinion.derived().pitch_radius;

    let external = GearPair::new(wheel, pinion);
    assert!(support::approx_eq(external.center_distance(), r_wheel + r_pinion, 1e-12));

    let internal = GearPair::new(ring, pinion);
    assert!(support::approx_eq(internal.center_distance(), r_pinion - r_wheel, 1e-12));

    let with_rack = GearPair::new(wheel, rack);
    assert!(support::approx_eq(with_rack.center_distance(), r_wheel, 1e-12));
}

#[test]
fn gear2_placement_depends_on_its_type() {
    let wheel = support::plain_gear(30, QualityPreset::Draft);
    let pinion = support::plain_gear(8, QualityPreset::Draft);
    let ring = support::plain_gear(-40, QualityPreset::Draft);
    let rack = support::plain_gear(0, QualityPreset::Draft);

    let placement = GearPair::new(wheel, pinion).gear2_placement();
    assert!(support::approx_eq(placement.rotation, 202.5, 1e-12));
    assert_eq!(placement.offset[1], 0.0);

    let placement = GearPair::new(pinion, ring).gear2_placement();
    assert_eq!(placement.rotation, 180.0);
    assert!(placement.offset[0] < 0.0);

    let placement = GearPair::new(wheel, rack).gear2_placement();
    assert_eq!(placement.rotation, 180.0);
    assert!(support::approx_eq(placement.offset[1], 4.0, 1e-12));
}

#[test]
fn external_gears_mesh_without_interference() {
    let wheel = support::plain_gear(30, QualityPreset::Normal);
    let pinion = support::plain_gear(8, QualityPreset::Normal);
    let layout = GearPair::new(wheel, pinion).layout(ShowOption::Both).unwrap();

    let gear1 = layout.gear1.as_ref().unwrap();
    let gear2 = layout.gear2.as_ref().unwrap();
    let overlap = gear1.shape.intersection(&gear2.shape).area();
    assert!(overlap < 1e-3, "meshing gears overlap by {overlap}");

    // The teeth actually reach into each other.
    let reach = layout.center_distance - pinion.derived().outer_radius;
    assert!(reach < wheel.derived().pitch_radius);
}

#[test]
fn layout_only_builds_selected_gears() {
    let wheel = support::default_wheel(30, 4.0);
    let pinion = support::default_wheel(8, 4.0);
    let pair = GearPair::new(wheel, pinion);

    let only_first = pair.layout(ShowOption::Gear1).unwrap();
    assert!(only_first.gear2.is_none());
    assert!(only_first.diagnostics.gear2.is_none());
    let gear1 = only_first.gear1.as_ref().unwrap();
    assert!(support::approx_eq(only_first.shape.area(), gear1.shape.area(), 1e-9));

    let only_second = pair.layout(ShowOption::Gear2).unwrap();
    assert!(only_second.gear1.is_none());
    let [min_x, _, max_x, _] = support::bounding_box(&only_second.shape);
    let center = (min_x + max_x) / 2.0;
    assert!(support::approx_eq(center, pair.center_distance(), 0.5));

    let both = pair.layout(ShowOption::Both).unwrap();
    let text = both.diagnostics.to_string();
    assert!(text.contains("gear1 external"));
    assert!(text.contains("gear2 external"));
    assert!(text.contains("stepCount"));
}

#[test]
fn ring_gear_takes_the_pinion_as_its_mate() {
    let ring = support::default_wheel(-30, 0.0);
    let pinion = support::default_wheel(8, 4.0);
    let layout = GearPair::new(ring, pinion).layout(ShowOption::Both).unwrap();

    let diagnostics = layout.diagnostics.gear1.unwrap();
    assert_eq!(diagnostics.gear_type, gearshaper::GearType::Internal);
    assert!(layout.center_distance < 0.0);
    // The pinion sits inside the ring.
    let ring_bounds = support::bounding_box(&layout.gear1.as_ref().unwrap().shape);
    let pinion_bounds = support::bounding_box(&layout.gear2.as_ref().unwrap().shape);
    assert!(pinion_bounds[0] > ring_bounds[0] && pinion_bounds[2] < ring_bounds[2]);
}

#[test]
fn ring_and_pinion_mesh_without_interference() {
    let ring = support::default_wheel(-30, 0.0);
    let pinion = support::default_wheel(8, 4.0);
    let layout = GearPair::new(ring, pinion).layout(ShowOption::Both).unwrap();

    let gear1 = layout.gear1.as_ref().unwrap();
    let gear2 = layout.gear2.as_ref().unwrap();
    let overlap = gear1.shape.intersection(&gear2.shape).area();
    assert!(overlap < 1e-3, "ring and pinion overlap by {overlap}");
}

#[test]
fn internal_gear_paired_with_a_rack_is_rejected() {
    let ring = support::plain_gear(-30, QualityPreset::Draft);
    let rack = support::plain_gear(0, QualityPreset::Draft);
    let err = GearPair::new(ring, rack).layout(ShowOption::Gear1).unwrap_err();
    assert!(matches!(err, GearError::InvalidMate(_)));

    // Showing only the rack never builds the ring.
    let rack_only = GearPair::new(ring, rack).layout(ShowOption::Gear2).unwrap();
    assert!(rack_only.gear1.is_none());
}
