//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use gearshaper::{
    float_types::Real,
    gear::{Gear, GearSpec, QualityPreset},
    sketch::Sketch,
    traits::CSGOps,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Bounds of a sketch as `[min_x, min_y, max_x, max_y]`.
pub fn bounding_box<S: Clone + Send + Sync + std::fmt::Debug>(sketch: &Sketch<S>) -> [Real; 4] {
    let rect = sketch
        .bounding_box()
        .expect("sketch should not be empty");
    [rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

/// Largest distance of any boundary vertex from the origin.
pub fn max_radius<S: Clone + Send + Sync + std::fmt::Debug>(sketch: &Sketch<S>) -> Real {
    sketch
        .outline_paths()
        .iter()
        .flatten()
        .map(|p| p[0].hypot(p[1]))
        .fold(0.0, Real::max)
}

/// Smallest distance of any boundary vertex from the origin.
pub fn min_radius<S: Clone + Send + Sync + std::fmt::Debug>(sketch: &Sketch<S>) -> Real {
    sketch
        .outline_paths()
        .iter()
        .flatten()
        .map(|p| p[0].hypot(p[1]))
        .fold(Real::MAX, Real::min)
}

/// Signed shoelace area of a closed point list, positive for counter-clockwise.
pub fn signed_area(points: &[[Real; 2]]) -> Real {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a[0] * b[1] - b[0] * a[1]
        })
        .sum::<Real>()
        / 2.0
}

/// A gear with circular pitch 8 and no clearance, backlash, shift or hole.
pub fn plain_gear(tooth_count: i32, quality: QualityPreset) -> Gear {
    let spec = GearSpec::builder()
        .tooth_count(tooth_count)
        .circular_pitch(8.0)
        .quality(quality.settings())
        .build()
        .expect("valid gear spec");
    Gear::new(spec).expect("valid gear")
}

/// The CLI's default wheel parameters with the given tooth count and hole.
pub fn default_wheel(tooth_count: i32, center_hole_diameter: Real) -> Gear {
    let spec = GearSpec::builder()
        .tooth_count(tooth_count)
        .circular_pitch(8.0)
        .clearance(0.05)
        .backlash(0.05)
        .center_hole_diameter(center_hole_diameter)
        .build()
        .expect("valid gear spec");
    Gear::new(spec).expect("valid gear")
}
