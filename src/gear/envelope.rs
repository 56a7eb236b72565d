//! Cutter envelope sweep for a single external tooth.
//!
//! The gear blank rolls along the cutter's pitch line. In the gear's frame the
//! cutter is therefore translated by the arc length rolled and rotated by the
//! roll angle; the union of all placements is the space between two teeth.

use crate::errors::GearError;
use crate::float_types::{PI, Real};
use crate::gear::cutter::CutterProfile;
use crate::gear::smoothing::{SmoothingMode, smooth_corners};
use crate::gear::{Gear, GearDiagnostics, Shape};
use crate::traits::CSGOps;
use nalgebra::{Matrix3, Point2, Rotation2, Translation2};
use tracing::{debug, warn};

/// Headroom over the analytic step bound before the sweep gives up.
const STEP_LIMIT_MARGIN: usize = 16;

/// One pose of the cutter: translate along x, then rotate about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutterPlacement {
    pub x_translation: Real,
    /// Degrees
    pub angle: Real,
}

impl CutterPlacement {
    pub fn matrix(&self) -> Matrix3<Real> {
        Rotation2::new(self.angle.to_radians()).to_homogeneous()
            * Translation2::new(self.x_translation, 0.0).to_homogeneous()
    }

    pub fn mirrored(&self) -> Self {
        CutterPlacement {
            x_translation: -self.x_translation,
            angle: -self.angle,
        }
    }
}

/// All cutter placements of one sweep, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub placements: Vec<CutterPlacement>,
    /// Steps that produced placements
    pub step_count: usize,
    /// Degrees
    pub angle_step_size: Real,
}

/// The smoothed space between two teeth, rotated so it is centred on the
/// middle of the single tooth sector.
#[derive(Debug, Clone)]
pub struct ToothCutout {
    pub shape: Shape,
    pub diagnostics: GearDiagnostics,
}

/// One tooth: the sector spanning one tooth-to-tooth angle minus the cutout.
#[derive(Debug, Clone)]
pub struct SingleTooth {
    pub shape: Shape,
    pub diagnostics: GearDiagnostics,
}

fn tooth_angle(gear: &Gear) -> Result<Real, GearError> {
    match gear.derived().angle_tooth_to_tooth {
        Some(angle) => Ok(angle),
        None => Err(GearError::InvalidParameter {
            name: "tooth_count",
            value: 0.0,
            reason: "the envelope sweep needs a pitch circle, racks are built directly",
        }),
    }
}

/// Walk the roll angle from zero until the cutter's tracking corner leaves the
/// outside circle.
pub fn sweep_placements(gear: &Gear, cutter: &CutterProfile) -> Result<Sweep, GearError> {
    let tooth_angle = tooth_angle(gear)?;
    let derived = gear.derived();
    let pitch_radius = derived.pitch_radius;
    if pitch_radius.is_nan() || pitch_radius <= 0.0 {
        return Err(GearError::NonPositivePitchRadius(pitch_radius));
    }
    let angle_step_size = tooth_angle / gear.spec().quality.steps_per_tooth_angle as Real;
    if !angle_step_size.is_finite() || angle_step_size <= 0.0 {
        return Err(GearError::NonPositiveStepSize(angle_step_size));
    }

    // The corner is past the outside circle once its x alone exceeds it.
    let outer_radius = derived.outer_radius;
    let reach = outer_radius + cutter.lower_left[0].abs();
    let step_limit = (((reach / pitch_radius).to_degrees() / angle_step_size).ceil() as usize)
        .saturating_add(STEP_LIMIT_MARGIN);

    let anchor = Point2::new(cutter.lower_left[0], cutter.lower_left[1]);
    let mut placements = Vec::new();
    let mut step = 0usize;
    loop {
        if step > step_limit {
            return Err(GearError::synthesis(
                gear.label(),
                format!("cutter sweep did not clear the outside circle within {step_limit} steps"),
            ));
        }
        let angle = step as Real * angle_step_size;
        let placement = CutterPlacement {
            x_translation: angle * PI / 180.0 * pitch_radius,
            angle,
        };
        let tracked = placement.matrix().transform_point(&anchor);
        if tracked.coords.norm() > outer_radius {
            break;
        }
        placements.push(placement);
        if placement.x_translation > 0.0 {
            placements.push(placement.mirrored());
        }
        step += 1;
    }

    debug!(
        gear = %gear.label(),
        step_count = step,
        angle_step_size,
        placements = placements.len(),
        "cutter sweep finished"
    );
    Ok(Sweep {
        placements,
        step_count: step,
        angle_step_size,
    })
}

/// Union of all cutter placements, outline smoothed and re-centred.
pub fn tooth_cutout(gear: &Gear) -> Result<ToothCutout, GearError> {
    let cutter = CutterProfile::for_gear(gear);
    let sweep = sweep_placements(gear, &cutter)?;
    let cutter_shape = cutter.to_shape();

    let mut accumulated = Shape::new();
    for placement in &sweep.placements {
        accumulated = accumulated.union(&cutter_shape.transform(&placement.matrix()));
    }
    if accumulated.polygon_count() > 1 || accumulated.hole_count() > 0 {
        warn!(
            gear = %gear.label(),
            polygons = accumulated.polygon_count(),
            holes = accumulated.hole_count(),
            "cutter union is not a single simple region, keeping the largest outline"
        );
    }

    let outline = accumulated
        .outline_paths()
        .into_iter()
        .next()
        .ok_or_else(|| GearError::synthesis(gear.label(), "cutter sweep produced no geometry"))?;
    let smoothed = smooth_corners(&outline, SmoothingMode::RemoveSingleConcave);
    debug!(
        gear = %gear.label(),
        before = outline.len(),
        after = smoothed.len(),
        "smoothed cutter outline"
    );

    let shape = Shape::from_points(&smoothed, None).rotate(-tooth_angle(gear)? / 2.0);
    Ok(ToothCutout {
        shape,
        diagnostics: cutter
            .diagnostics(gear)
            .with_steps(sweep.step_count, sweep.angle_step_size),
    })
}

/// The sector `[90 - a, 90]` degrees of the outside circle minus the cutout.
pub fn single_tooth(gear: &Gear) -> Result<SingleTooth, GearError> {
    let cutout = tooth_cutout(gear)?;
    let angle = tooth_angle(gear)?;
    let sector = Shape::pie_slice(
        gear.derived().outer_radius,
        90.0,
        90.0 - angle,
        gear.spec().quality.resolution,
        None,
    );
    let shape = sector.difference(&cutout.shape);
    if shape.is_empty() {
        return Err(GearError::synthesis(
            gear.label(),
            "the cutter removed the whole tooth sector",
        ));
    }
    if shape.polygon_count() > 1 {
        warn!(
            gear = %gear.label(),
            pieces = shape.polygon_count(),
            "single tooth is split into several pieces"
        );
    }
    Ok(SingleTooth {
        shape,
        diagnostics: cutout.diagnostics,
    })
}
