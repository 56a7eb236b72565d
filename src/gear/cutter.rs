//! The trapezoidal rack tooth that cuts involute flanks.

use crate::float_types::Real;
use crate::gear::{Gear, GearDiagnostics, Shape};
use crate::sketch::Path2D;

/// Basic rack tooth ("cutter") in the gear's frame, tip pointing at the gear
/// centre and the pitch line at `y = pitch_radius`.
///
/// Corners are stored in the order lower-left, upper-left, upper-right,
/// lower-right. The lower-left corner is the tracking point used to decide
/// when the sweep has cleared the gear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutterProfile {
    pub lower_left: [Real; 2],
    pub upper_left: [Real; 2],
    pub upper_right: [Real; 2],
    pub lower_right: [Real; 2],
    pub tooth_width: Real,
    pub depth: Real,
    pub outside_length: Real,
    pub half_backlash_offset: Real,
    addendum: Real,
    shifted_addendum: Real,
    clearance: Real,
    backlash: Real,
}

impl CutterProfile {
    /// Cutter for `gear`, which must have a pitch circle.
    pub fn for_gear(gear: &Gear) -> Self {
        let spec = gear.spec();
        let derived = gear.derived();
        let tooth_width = derived.circular_pitch / 2.0;
        let addendum = derived.addendum;
        let depth = addendum + spec.clearance;
        let outside_length = 3.0 * addendum;
        let (sin_a, cos_a) = spec.pressure_angle.to_radians().sin_cos();
        let half_backlash_offset = spec.backlash / 2.0 / cos_a;

        let pitch_line = derived.pitch_radius + spec.profile_shift * addendum;
        let lower_right = [
            tooth_width / 2.0 + half_backlash_offset - depth * sin_a,
            pitch_line - depth,
        ];
        let upper_right = [
            tooth_width / 2.0 + half_backlash_offset + outside_length * sin_a,
            pitch_line + outside_length,
        ];

        CutterProfile {
            lower_left: [-lower_right[0], lower_right[1]],
            upper_left: [-upper_right[0], upper_right[1]],
            upper_right,
            lower_right,
            tooth_width,
            depth,
            outside_length,
            half_backlash_offset,
            addendum,
            shifted_addendum: derived.shifted_addendum,
            clearance: spec.clearance,
            backlash: spec.backlash,
        }
    }

    pub const fn corners(&self) -> [[Real; 2]; 4] {
        [self.lower_left, self.upper_left, self.upper_right, self.lower_right]
    }

    /// Filled trapezoid.
    pub fn to_shape(&self) -> Shape {
        Shape::from_points(&self.corners(), None)
    }

    /// Outline of the trapezoid stroked with `radius`, for illustrations.
    pub fn to_stroked_shape(&self, radius: Real, resolution: usize) -> Shape {
        Path2D::new(self.corners().to_vec(), true).expand_to_sketch(radius, resolution, None)
    }

    /// Cutter values with the sweep fields left at zero.
    pub fn diagnostics(&self, gear: &Gear) -> GearDiagnostics {
        GearDiagnostics {
            gear_type: gear.gear_type(),
            tooth_width: self.tooth_width,
            addendum: self.addendum,
            shifted_addendum: self.shifted_addendum,
            clearance: self.clearance,
            backlash: self.backlash,
            half_backlash_offset: self.half_backlash_offset,
            cutter_depth: self.depth,
            step_count: 0,
            angle_step_size: 0.0,
        }
    }
}
