//! Line drawing of the cutter sweep, for explaining how a tooth is formed.

use crate::errors::GearError;
use crate::float_types::Real;
use crate::gear::cutter::CutterProfile;
use crate::gear::envelope::sweep_placements;
use crate::gear::{Gear, GearType, Shape};
use crate::sketch::Path2D;
use crate::traits::CSGOps;
use tracing::debug;

/// Stroke radius of every drawn line.
pub const DEMO_PATH_RADIUS: Real = 0.01;

/// Segments per full turn of the stroke end caps, raised to 3 by the stroker.
pub const DEMO_PATH_RESOLUTION: usize = 2;

/// The outside circle plus the outline of the cutter at every sweep position,
/// all as thin strokes.
pub fn cutout_demo(gear: &Gear) -> Result<Shape, GearError> {
    if gear.gear_type() != GearType::External {
        return Err(GearError::InvalidParameter {
            name: "tooth_count",
            value: gear.spec().tooth_count as Real,
            reason: "the cutout demo is only drawn for external gears",
        });
    }
    let resolution = gear.spec().quality.resolution;
    let outer_radius = gear.derived().outer_radius;
    let mut drawing = Path2D::arc([0.0, 0.0], outer_radius, 0.0, 360.0, resolution)
        .close()
        .expand_to_sketch(DEMO_PATH_RADIUS, DEMO_PATH_RESOLUTION, None);

    let cutter = CutterProfile::for_gear(gear);
    let stroke = cutter.to_stroked_shape(DEMO_PATH_RADIUS, DEMO_PATH_RESOLUTION);
    let sweep = sweep_placements(gear, &cutter)?;
    for placement in &sweep.placements {
        drawing = drawing.union(&stroke.transform(&placement.matrix()));
    }
    debug!(
        gear = %gear.label(),
        placements = sweep.placements.len(),
        "cutout demo drawn"
    );
    Ok(drawing)
}
