//! Intermediate values reported alongside every synthesized profile.

use crate::float_types::Real;
use crate::gear::GearType;
use std::fmt::{self, Display};

/// Numbers worth showing to whoever is checking a generated gear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearDiagnostics {
    pub gear_type: GearType,
    /// Half the circular pitch
    pub tooth_width: Real,
    pub addendum: Real,
    pub shifted_addendum: Real,
    pub clearance: Real,
    pub backlash: Real,
    /// Horizontal cutter offset caused by backlash
    pub half_backlash_offset: Real,
    /// Addendum plus clearance
    pub cutter_depth: Real,
    /// Cutter placements evaluated, 0 for racks
    pub step_count: usize,
    /// Degrees between placements, 0 for racks
    pub angle_step_size: Real,
}

impl GearDiagnostics {
    pub const fn with_steps(mut self, step_count: usize, angle_step_size: Real) -> Self {
        self.step_count = step_count;
        self.angle_step_size = angle_step_size;
        self
    }

    pub const fn with_gear_type(mut self, gear_type: GearType) -> Self {
        self.gear_type = gear_type;
        self
    }
}

impl Display for GearDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: toothWidth: {:.4}, addendum: {:.4}, shiftedAddendum: {:.4}, clearance: {:.4}, \
             backlash: {:.4}, dx: {:.4}, cutterDepth: {:.4}, stepCount: {}, angleStepSize: {:.4}",
            self.gear_type,
            self.tooth_width,
            self.addendum,
            self.shifted_addendum,
            self.clearance,
            self.backlash,
            self.half_backlash_offset,
            self.cutter_depth,
            self.step_count,
            self.angle_step_size,
        )
    }
}

/// Diagnostics of whichever gears a layout produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairDiagnostics {
    pub gear1: Option<GearDiagnostics>,
    pub gear2: Option<GearDiagnostics>,
}

impl Display for PairDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, diagnostics) in [("gear1", &self.gear1), ("gear2", &self.gear2)] {
            if let Some(d) = diagnostics {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{name} {d}")?;
                first = false;
            }
        }
        Ok(())
    }
}
