//! Complete outlines for external gears, internal (ring) gears and racks.

use crate::errors::GearError;
use crate::float_types::{Real, tolerance};
use crate::gear::envelope::single_tooth;
use crate::gear::smoothing::{SmoothingMode, smooth_corners};
use crate::gear::{Gear, GearDiagnostics, GearType, MeshPairContext, Shape};
use crate::traits::CSGOps;
use nalgebra::{Rotation2, Vector2};
use tracing::{debug, info, warn};

/// A finished outline centred on the origin.
///
/// External gears have a tooth pointing along +X, internal gears have a tooth
/// centred on -X. Racks run along Y with teeth pointing towards +X.
#[derive(Debug, Clone)]
pub struct GearProfile {
    pub gear_type: GearType,
    pub shape: Shape,
    pub diagnostics: GearDiagnostics,
}

impl Gear {
    /// Synthesize the outline of this gear.
    ///
    /// Internal gears are shaped by their mating pinion and need `mate`; the
    /// other gear types ignore it.
    pub fn profile(&self, mate: Option<&MeshPairContext>) -> Result<GearProfile, GearError> {
        info!(gear = %self.label(), "synthesizing profile");
        let profile = match self.gear_type() {
            GearType::External => external_profile(self),
            GearType::Internal => internal_profile(self, mate.ok_or(GearError::MissingMate)?),
            GearType::Rack => rack_profile(self),
        }?;
        debug!(
            gear = %self.label(),
            area = profile.shape.area(),
            polygons = profile.shape.polygon_count(),
            "profile finished"
        );
        Ok(profile)
    }
}

/// Index of the outline point closest to `target`, if it lies within the
/// crate tolerance (as squared distance).
fn find_corner(outline: &[[Real; 2]], target: [Real; 2]) -> Option<usize> {
    outline
        .iter()
        .map(|p| (p[0] - target[0]).powi(2) + (p[1] - target[1]).powi(2))
        .enumerate()
        .filter(|&(_, d)| d < tolerance())
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// `chain` followed by `count - 1` copies of itself, copy `i` rotated by
/// `i * step_deg` about the origin.
fn replicate_around_origin(chain: &[[Real; 2]], count: usize, step_deg: Real) -> Vec<[Real; 2]> {
    let mut points = Vec::with_capacity(chain.len() * count);
    for i in 0..count {
        let rotation = Rotation2::new((i as Real * step_deg).to_radians());
        points.extend(chain.iter().map(|p| {
            let v = rotation * Vector2::new(p[0], p[1]);
            [v.x, v.y]
        }));
    }
    points
}

/// `count` consecutive outline points starting `skip` after `start`.
fn take_cyclic(outline: &[[Real; 2]], start: usize, skip: usize, count: usize) -> Vec<[Real; 2]> {
    let n = outline.len();
    (0..count).map(|i| outline[(start + skip + i) % n]).collect()
}

fn external_profile(gear: &Gear) -> Result<GearProfile, GearError> {
    let tooth = single_tooth(gear)?;
    let spec = gear.spec();
    let derived = gear.derived();
    let angle = derived.angle_tooth_to_tooth.ok_or(GearError::ZeroToothCount(GearType::External))?;

    let outline = tooth.shape.outline_paths().into_iter().next().ok_or_else(|| {
        GearError::synthesis(gear.label(), "single tooth has no outline")
    })?;
    if outline.len() < 4 {
        return Err(GearError::synthesis(gear.label(), "single tooth outline is degenerate"));
    }
    let apex = find_corner(&outline, [0.0, 0.0]).ok_or_else(|| {
        GearError::synthesis(gear.label(), "single tooth outline does not reach the gear centre")
    })?;

    // Drop the apex and the point just before it, which is where the next
    // copy's first point lands.
    let chain = take_cyclic(&outline, apex, 1, outline.len() - 2);
    let points = replicate_around_origin(&chain, derived.tooth_count, angle);
    let mut shape = Shape::from_points_no_check(&points, None);

    if spec.center_hole_diameter > 0.0 {
        let hole = Shape::circle(
            [0.0, 0.0],
            spec.center_hole_diameter / 2.0,
            spec.quality.resolution,
            None,
        );
        shape = shape.difference(&hole);
    }

    Ok(GearProfile {
        gear_type: GearType::External,
        shape: shape.rotate(-90.0),
        diagnostics: tooth.diagnostics,
    })
}

/// Root radius of a ring gear, where its tooth spaces end.
fn ring_inner_radius(gear: &Gear) -> Real {
    let spec = gear.spec();
    let derived = gear.derived();
    derived.pitch_radius + (1.0 - spec.profile_shift) * derived.addendum + spec.clearance
}

fn internal_profile(gear: &Gear, mate: &MeshPairContext) -> Result<GearProfile, GearError> {
    let spec = gear.spec();
    let derived = gear.derived();
    let angle = derived.angle_tooth_to_tooth.ok_or(GearError::ZeroToothCount(GearType::Internal))?;

    let pinion = mate.enlarged_pinion()?;
    let pinion_tooth = single_tooth(&pinion)?;
    let pinion_teeth = pinion.derived().tooth_count as Real;
    let pinion_angle = 360.0 / pinion_teeth;
    // Turn the pinion's tooth space towards -X, where the ring keeps a tooth.
    let cutter = pinion_tooth.shape.rotate(90.0 + pinion_angle / 2.0);

    let radius = ring_inner_radius(gear);
    let (sin_h, cos_h) = (angle / 2.0).to_radians().sin_cos();
    let wedge = Shape::from_points(
        &[
            [0.0, 0.0],
            [-radius * cos_h, radius * sin_h],
            [-radius, 0.0],
            [-radius * cos_h, -radius * sin_h],
        ],
        None,
    );
    let bore = Shape::circle(
        [0.0, 0.0],
        radius - (2.0 * derived.addendum + spec.clearance),
        spec.quality.resolution,
        None,
    );
    let center_offset = mate.pitch_radius - derived.pitch_radius;
    let mut tooth = wedge.difference(&bore).difference(&cutter.translate(center_offset, 0.0));

    let steps = spec.quality.steps_per_tooth_angle;
    let rotation_step = pinion_angle / steps as Real;
    let ratio = pinion_teeth / derived.tooth_count as Real;
    for i in 1..steps {
        let pinion_rotation = i as Real * rotation_step;
        let center_ray = -pinion_rotation * ratio;
        for sign in [1.0, -1.0] {
            let placed = cutter
                .rotate(sign * pinion_rotation)
                .translate(center_offset, 0.0)
                .rotate(sign * center_ray);
            tooth = tooth.difference(&placed);
        }
    }
    if tooth.polygon_count() != 1 || tooth.hole_count() > 0 {
        warn!(
            gear = %gear.label(),
            polygons = tooth.polygon_count(),
            holes = tooth.hole_count(),
            "ring tooth is not a single simple region, keeping the largest outline"
        );
    }

    let outline = tooth.outline_paths().into_iter().next().ok_or_else(|| {
        GearError::synthesis(gear.label(), "the pinion removed the whole ring tooth")
    })?;
    if outline.len() < 6 {
        return Err(GearError::synthesis(gear.label(), "ring tooth outline is degenerate"));
    }
    let corner = find_corner(&outline, [-radius, 0.0]).ok_or_else(|| {
        GearError::synthesis(gear.label(), "ring tooth outline lost its outer corner")
    })?;

    // Skip the outer corner, the wedge corners beside it and the point where
    // the next copy starts. What is left runs clockwise about the centre with
    // the material on its left.
    let chain = take_cyclic(&outline, corner, 2, outline.len() - 4);
    let ring_loop = replicate_around_origin(&chain, derived.tooth_count, -angle);
    let smoothed = smooth_corners(&ring_loop, SmoothingMode::RemoveSingleConvex);
    debug!(
        gear = %gear.label(),
        before = ring_loop.len(),
        after = smoothed.len(),
        "smoothed ring outline"
    );

    let rim = Shape::circle(
        [0.0, 0.0],
        radius + 4.0 * derived.addendum,
        spec.quality.resolution,
        None,
    );
    let shape = rim.difference(&Shape::from_points_no_check(&smoothed, None));
    if spec.center_hole_diameter > 0.0 {
        debug!(gear = %gear.label(), "centre hole ignored for internal gear");
    }

    Ok(GearProfile {
        gear_type: GearType::Internal,
        shape,
        diagnostics: pinion_tooth
            .diagnostics
            .with_gear_type(GearType::Internal)
            .with_steps(steps, rotation_step),
    })
}

fn rack_profile(gear: &Gear) -> Result<GearProfile, GearError> {
    let spec = gear.spec();
    let derived = gear.derived();
    let circular_pitch = derived.circular_pitch;
    let addendum = derived.addendum;
    let tooth_width = circular_pitch / 2.0;
    let depth = addendum + spec.clearance;
    let (sin_a, cos_a) = spec.pressure_angle.to_radians().sin_cos();
    let half_backlash_offset = spec.backlash / 4.0 / cos_a;

    let upper_left = [-depth, tooth_width / 2.0 - half_backlash_offset + depth * sin_a];
    let upper_right = [addendum, tooth_width / 2.0 - half_backlash_offset - addendum * sin_a];
    // The root stub reaches into the bar so teeth and bar overlap instead of
    // sharing an edge.
    let stub = [-depth - addendum, upper_left[1]];
    let tooth = Shape::from_points(
        &[
            stub,
            upper_left,
            upper_right,
            [upper_right[0], -upper_right[1]],
            [upper_left[0], -upper_left[1]],
            [stub[0], -stub[1]],
        ],
        None,
    );
    if tooth.is_empty() {
        return Err(GearError::synthesis(gear.label(), "rack tooth has no width"));
    }

    let count = spec.rack_tooth_count;
    let teeth = tooth
        .distribute_linear(count, Vector2::y(), circular_pitch)
        .translate(0.0, (0.5 - count as Real / 2.0) * circular_pitch);

    let half_height = count as Real * circular_pitch / 2.0;
    let bar = Shape::rectangle_corners(
        [-depth - 4.0 * addendum, -half_height],
        [-depth, half_height],
        None,
    );
    let shape = teeth.union(&bar).translate(addendum * spec.profile_shift, 0.0);

    Ok(GearProfile {
        gear_type: GearType::Rack,
        shape,
        diagnostics: GearDiagnostics {
            gear_type: GearType::Rack,
            tooth_width,
            addendum,
            shifted_addendum: derived.shifted_addendum,
            clearance: spec.clearance,
            backlash: spec.backlash,
            half_backlash_offset,
            cutter_depth: depth,
            step_count: 0,
            angle_step_size: 0.0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replicate_rotates_each_copy() {
        let points = replicate_around_origin(&[[1.0, 0.0]], 4, 90.0);
        let expected = [[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0], [0.0, -1.0]];
        for (p, e) in points.iter().zip(expected) {
            assert!((p[0] - e[0]).abs() < 1e-12 && (p[1] - e[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn corner_lookup_wraps_and_respects_tolerance() {
        let outline = [[3.0, 0.0], [0.0, 0.0], [0.0, 3.0]];
        assert_eq!(find_corner(&outline, [0.0, 0.0]), Some(1));
        assert_eq!(find_corner(&outline, [1.0, 1.0]), None);
        assert_eq!(take_cyclic(&outline, 2, 1, 2), vec![[3.0, 0.0], [0.0, 0.0]]);
    }
}
