//! Two meshing gears placed side by side.

use crate::errors::GearError;
use crate::float_types::Real;
use crate::gear::{Gear, GearProfile, GearType, PairDiagnostics, Shape};
use crate::traits::CSGOps;
use tracing::{debug, info};

/// Which of the two gears to draw. Built from the `show` bit mask where bit 0
/// selects gear 1 and bit 1 selects gear 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowOption {
    Gear1,
    Gear2,
    #[default]
    Both,
}

impl ShowOption {
    pub const fn from_mask(mask: u8) -> Result<Self, GearError> {
        match (mask & 1 != 0, mask & 2 != 0) {
            (true, true) => Ok(ShowOption::Both),
            (true, false) => Ok(ShowOption::Gear1),
            (false, true) => Ok(ShowOption::Gear2),
            (false, false) => Err(GearError::EmptySelection(mask)),
        }
    }

    pub const fn shows_gear1(self) -> bool {
        matches!(self, ShowOption::Gear1 | ShowOption::Both)
    }

    pub const fn shows_gear2(self) -> bool {
        matches!(self, ShowOption::Gear2 | ShowOption::Both)
    }
}

impl TryFrom<u8> for ShowOption {
    type Error = GearError;

    fn try_from(mask: u8) -> Result<Self, Self::Error> {
        ShowOption::from_mask(mask)
    }
}

/// Rigid motion applied to gear 2: rotate about its own centre, then move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Degrees
    pub rotation: Real,
    pub offset: [Real; 2],
}

impl Placement {
    pub fn apply(&self, shape: &Shape) -> Shape {
        shape.rotate(self.rotation).translate(self.offset[0], self.offset[1])
    }
}

/// Two gears that mesh with each other, gear 1 at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearPair {
    gear1: Gear,
    gear2: Gear,
}

/// Selected profiles in their final positions.
#[derive(Debug, Clone)]
pub struct PairedLayout {
    pub center_distance: Real,
    pub gear2_placement: Placement,
    /// At the origin, unrotated
    pub gear1: Option<GearProfile>,
    /// Already moved by `gear2_placement`
    pub gear2: Option<GearProfile>,
    /// Union of the selected profiles
    pub shape: Shape,
    pub diagnostics: PairDiagnostics,
}

impl GearPair {
    pub const fn new(gear1: Gear, gear2: Gear) -> Self {
        GearPair { gear1, gear2 }
    }

    pub const fn gear1(&self) -> &Gear {
        &self.gear1
    }

    pub const fn gear2(&self) -> &Gear {
        &self.gear2
    }

    /// Signed sum of the pitch radii. Negative when gear 2 is a ring gear
    /// around gear 1.
    pub fn center_distance(&self) -> Real {
        self.gear1.derived().signed_pitch_radius() + self.gear2.derived().signed_pitch_radius()
    }

    /// Where gear 2 goes so that its teeth interleave with gear 1's.
    pub fn gear2_placement(&self) -> Placement {
        let distance = self.center_distance();
        let derived = self.gear2.derived();
        match derived.gear_type {
            GearType::External => Placement {
                rotation: 180.0 + 180.0 / derived.tooth_count as Real,
                offset: [distance, 0.0],
            },
            GearType::Internal => Placement {
                rotation: 180.0,
                offset: [distance, 0.0],
            },
            GearType::Rack => Placement {
                rotation: 180.0,
                offset: [distance, derived.circular_pitch / 2.0],
            },
        }
    }

    /// Synthesize gear 1 at the origin. An internal gear is cut by gear 2.
    pub fn gear1_profile(&self) -> Result<GearProfile, GearError> {
        self.gear1.profile(Some(&self.gear2.mesh_context()))
    }

    /// Synthesize gear 2 at the origin, before placement.
    pub fn gear2_profile(&self) -> Result<GearProfile, GearError> {
        self.gear2.profile(Some(&self.gear1.mesh_context()))
    }

    pub fn layout(&self, show: ShowOption) -> Result<PairedLayout, GearError> {
        let center_distance = self.center_distance();
        let gear2_placement = self.gear2_placement();
        info!(
            gear1 = %self.gear1.label(),
            gear2 = %self.gear2.label(),
            center_distance,
            ?show,
            "laying out gear pair"
        );

        let gear1 = if show.shows_gear1() {
            Some(self.gear1_profile()?)
        } else {
            None
        };
        let gear2 = if show.shows_gear2() {
            let mut profile = self.gear2_profile()?;
            profile.shape = gear2_placement.apply(&profile.shape);
            Some(profile)
        } else {
            None
        };

        let mut shape = Shape::new();
        for profile in gear1.iter().chain(gear2.iter()) {
            shape = shape.union(&profile.shape);
        }
        debug!(
            area = shape.area(),
            polygons = shape.polygon_count(),
            "gear pair laid out"
        );

        Ok(PairedLayout {
            center_distance,
            gear2_placement,
            diagnostics: PairDiagnostics {
                gear1: gear1.as_ref().map(|p| p.diagnostics),
                gear2: gear2.as_ref().map(|p| p.diagnostics),
            },
            gear1,
            gear2,
            shape,
        })
    }
}
