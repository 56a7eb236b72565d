//! Gear parameters and the values derived from them.
//!
//! A [`GearSpec`] is what the caller asks for, a [`DerivedGear`] holds the
//! dimensions computed once from it and a [`Gear`] pairs the two after
//! validation. Profiles are synthesized from a `Gear` by the functions in
//! [`profile`].

use crate::errors::GearError;
use crate::float_types::{PI, Real};
use crate::sketch::Sketch;
use std::fmt::{self, Display};

pub mod cutter;
pub mod demo;
pub mod diagnostics;
pub mod envelope;
pub mod profile;
pub mod quality;
pub mod smoothing;

pub use diagnostics::{GearDiagnostics, PairDiagnostics};
pub use profile::GearProfile;
pub use quality::{QualityPreset, QualitySettings};

/// Gear outlines carry no per-polygon metadata.
pub type Shape = Sketch<()>;

/// Rack tooth count used when none is given.
pub const DEFAULT_RACK_TEETH: usize = 41;

/// Pressure angle used when none is given, in degrees.
pub const DEFAULT_PRESSURE_ANGLE: Real = 20.0;

/// Which kind of toothed part is being built. Chosen once from the sign of the
/// tooth count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearType {
    /// Positive tooth count
    External,
    /// Negative tooth count, a ring gear with teeth on the inside
    Internal,
    /// Zero tooth count, a straight toothed bar
    Rack,
}

impl GearType {
    pub const fn from_tooth_count(tooth_count: i32) -> Self {
        if tooth_count > 0 {
            GearType::External
        } else if tooth_count < 0 {
            GearType::Internal
        } else {
            GearType::Rack
        }
    }
}

impl Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GearType::External => write!(f, "external"),
            GearType::Internal => write!(f, "internal"),
            GearType::Rack => write!(f, "rack"),
        }
    }
}

/// Tooth spacing, given either as arc length along the pitch circle or as teeth
/// per unit of pitch diameter. Either one determines the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pitch {
    Circular(Real),
    Diametral(Real),
}

impl Pitch {
    pub fn circular(&self) -> Real {
        match *self {
            Pitch::Circular(p) => p,
            Pitch::Diametral(p) => PI / p,
        }
    }

    pub fn diametral(&self) -> Real {
        match *self {
            Pitch::Circular(p) => PI / p,
            Pitch::Diametral(p) => p,
        }
    }

    const fn raw(&self) -> Real {
        match *self {
            Pitch::Circular(p) | Pitch::Diametral(p) => p,
        }
    }
}

/// Rack tooth counts are always odd so that one tooth sits on the centre line.
pub const fn normalize_rack_tooth_count(requested: usize) -> usize {
    2 * (requested / 2) + 1
}

/// Caller supplied gear parameters. Build with [`GearSpec::builder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSpec {
    /// `> 0` external, `< 0` internal, `0` rack
    pub tooth_count: i32,
    pub pitch: Pitch,
    /// Degrees
    pub pressure_angle: Real,
    pub clearance: Real,
    pub backlash: Real,
    /// Fraction of the addendum moved to (positive) or from (negative) this gear
    pub profile_shift: Real,
    pub center_hole_diameter: Real,
    pub quality: QualitySettings,
    /// Always odd, see [`normalize_rack_tooth_count`]
    pub rack_tooth_count: usize,
}

impl GearSpec {
    pub fn builder() -> GearSpecBuilder {
        GearSpecBuilder::default()
    }

    /// Check every parameter that would otherwise make synthesis loop forever
    /// or produce garbage.
    pub fn validate(&self) -> Result<(), GearError> {
        let pitch = self.pitch.raw();
        if !pitch.is_finite() || pitch <= 0.0 {
            return Err(GearError::InvalidPitch(pitch));
        }
        if !self.pressure_angle.is_finite() || !(0.0..90.0).contains(&self.pressure_angle) {
            return Err(GearError::InvalidParameter {
                name: "pressure_angle",
                value: self.pressure_angle,
                reason: "must be in [0, 90) degrees",
            });
        }
        for (name, value) in [
            ("clearance", self.clearance),
            ("backlash", self.backlash),
            ("profile_shift", self.profile_shift),
        ] {
            if !value.is_finite() {
                return Err(GearError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if !self.center_hole_diameter.is_finite() || self.center_hole_diameter < 0.0 {
            return Err(GearError::InvalidParameter {
                name: "center_hole_diameter",
                value: self.center_hole_diameter,
                reason: "must be >= 0",
            });
        }
        self.quality.validate()?;
        if self.rack_tooth_count % 2 == 0 {
            return Err(GearError::InvalidParameter {
                name: "rack_tooth_count",
                value: self.rack_tooth_count as Real,
                reason: "must be odd",
            });
        }
        Ok(())
    }
}

/// Builder for [`GearSpec`]; defaults follow common stock gears.
#[derive(Debug, Clone, Copy)]
pub struct GearSpecBuilder {
    tooth_count: i32,
    pitch: Option<Pitch>,
    pressure_angle: Real,
    clearance: Real,
    backlash: Real,
    profile_shift: Real,
    center_hole_diameter: Real,
    quality: QualitySettings,
    rack_teeth: usize,
}

impl Default for GearSpecBuilder {
    fn default() -> Self {
        GearSpecBuilder {
            tooth_count: 15,
            pitch: None,
            pressure_angle: DEFAULT_PRESSURE_ANGLE,
            clearance: 0.0,
            backlash: 0.0,
            profile_shift: 0.0,
            center_hole_diameter: 0.0,
            quality: QualityPreset::Draft.settings(),
            rack_teeth: DEFAULT_RACK_TEETH,
        }
    }
}

impl GearSpecBuilder {
    pub const fn tooth_count(mut self, tooth_count: i32) -> Self {
        self.tooth_count = tooth_count;
        self
    }

    pub const fn circular_pitch(mut self, circular_pitch: Real) -> Self {
        self.pitch = Some(Pitch::Circular(circular_pitch));
        self
    }

    pub const fn diametral_pitch(mut self, diametral_pitch: Real) -> Self {
        self.pitch = Some(Pitch::Diametral(diametral_pitch));
        self
    }

    pub const fn pitch(mut self, pitch: Pitch) -> Self {
        self.pitch = Some(pitch);
        self
    }

    pub const fn pressure_angle(mut self, degrees: Real) -> Self {
        self.pressure_angle = degrees;
        self
    }

    pub const fn clearance(mut self, clearance: Real) -> Self {
        self.clearance = clearance;
        self
    }

    pub const fn backlash(mut self, backlash: Real) -> Self {
        self.backlash = backlash;
        self
    }

    pub const fn profile_shift(mut self, profile_shift: Real) -> Self {
        self.profile_shift = profile_shift;
        self
    }

    pub const fn center_hole_diameter(mut self, diameter: Real) -> Self {
        self.center_hole_diameter = diameter;
        self
    }

    pub const fn quality(mut self, quality: QualitySettings) -> Self {
        self.quality = quality;
        self
    }

    /// Requested rack tooth count, rounded up to the next odd number.
    pub const fn rack_teeth(mut self, rack_teeth: usize) -> Self {
        self.rack_teeth = rack_teeth;
        self
    }

    pub fn build(self) -> Result<GearSpec, GearError> {
        let pitch = self.pitch.ok_or(GearError::MissingPitch)?;
        let spec = GearSpec {
            tooth_count: self.tooth_count,
            pitch,
            pressure_angle: self.pressure_angle,
            clearance: self.clearance,
            backlash: self.backlash,
            profile_shift: self.profile_shift,
            center_hole_diameter: self.center_hole_diameter,
            quality: self.quality,
            rack_tooth_count: normalize_rack_tooth_count(self.rack_teeth),
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Dimensions computed once from a [`GearSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGear {
    pub gear_type: GearType,
    /// Magnitude of the requested tooth count
    pub tooth_count: usize,
    pub circular_pitch: Real,
    pub diametral_pitch: Real,
    pub pitch_diameter: Real,
    pub pitch_radius: Real,
    /// Radial distance from pitch circle to outside circle
    pub addendum: Real,
    pub shifted_addendum: Real,
    pub outer_radius: Real,
    /// Degrees between neighbouring teeth, `None` for racks
    pub angle_tooth_to_tooth: Option<Real>,
}

impl DerivedGear {
    pub fn new(spec: &GearSpec) -> Result<Self, GearError> {
        let gear_type = GearType::from_tooth_count(spec.tooth_count);
        let tooth_count = spec.tooth_count.unsigned_abs() as usize;
        let diametral_pitch = spec.pitch.diametral();
        let circular_pitch = spec.pitch.circular();

        let pitch_diameter = tooth_count as Real / diametral_pitch;
        let pitch_radius = pitch_diameter / 2.0;
        let addendum = 1.0 / diametral_pitch;
        let shifted_addendum = addendum * (1.0 + spec.profile_shift);

        let angle_tooth_to_tooth = match gear_type {
            GearType::Rack => None,
            GearType::External | GearType::Internal => {
                if tooth_count == 0 {
                    return Err(GearError::ZeroToothCount(gear_type));
                }
                if pitch_radius.is_nan() || pitch_radius <= 0.0 {
                    return Err(GearError::NonPositivePitchRadius(pitch_radius));
                }
                Some(360.0 / tooth_count as Real)
            },
        };

        Ok(DerivedGear {
            gear_type,
            tooth_count,
            circular_pitch,
            diametral_pitch,
            pitch_diameter,
            pitch_radius,
            addendum,
            shifted_addendum,
            outer_radius: pitch_radius + shifted_addendum,
            angle_tooth_to_tooth,
        })
    }

    /// Pitch radius as seen from the mating gear: negative for ring gears, so
    /// the sum of two signed radii is the distance between gear centres.
    pub fn signed_pitch_radius(&self) -> Real {
        match self.gear_type {
            GearType::Internal => -self.pitch_radius,
            GearType::External | GearType::Rack => self.pitch_radius,
        }
    }
}

/// A validated gear: the caller's parameters plus everything derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gear {
    spec: GearSpec,
    derived: DerivedGear,
}

impl Gear {
    pub fn new(spec: GearSpec) -> Result<Self, GearError> {
        spec.validate()?;
        let derived = DerivedGear::new(&spec)?;
        Ok(Gear { spec, derived })
    }

    pub const fn spec(&self) -> &GearSpec {
        &self.spec
    }

    pub const fn derived(&self) -> &DerivedGear {
        &self.derived
    }

    pub const fn gear_type(&self) -> GearType {
        self.derived.gear_type
    }

    /// Parameters of this gear as the mate of another one.
    pub fn mesh_context(&self) -> MeshPairContext {
        MeshPairContext::from(self)
    }

    /// Short human readable name used in logs and errors.
    pub fn label(&self) -> String {
        match self.derived.gear_type {
            GearType::Rack => format!("rack ({} teeth)", self.spec.rack_tooth_count),
            gear_type => format!("{gear_type} gear ({} teeth)", self.derived.tooth_count),
        }
    }
}

/// What one gear's synthesis needs to know about its mate.
///
/// A plain value copied out of the mating [`Gear`]; ring gears are cut by an
/// enlarged copy of the pinion described here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPairContext {
    pub gear_type: GearType,
    pub tooth_count: usize,
    pub pitch_radius: Real,
    pub circular_pitch: Real,
    pub pressure_angle: Real,
    pub clearance: Real,
    pub backlash: Real,
    pub profile_shift: Real,
    pub quality: QualitySettings,
}

impl From<&Gear> for MeshPairContext {
    fn from(gear: &Gear) -> Self {
        MeshPairContext {
            gear_type: gear.derived.gear_type,
            tooth_count: gear.derived.tooth_count,
            pitch_radius: gear.derived.pitch_radius,
            circular_pitch: gear.derived.circular_pitch,
            pressure_angle: gear.spec.pressure_angle,
            clearance: gear.spec.clearance,
            backlash: gear.spec.backlash,
            profile_shift: gear.spec.profile_shift,
            quality: gear.spec.quality,
        }
    }
}

impl MeshPairContext {
    /// The pinion with clearance and backlash negated. Used as the shaping tool
    /// for internal teeth it leaves exactly the room the real pinion needs.
    pub fn enlarged_pinion(&self) -> Result<Gear, GearError> {
        match self.gear_type {
            GearType::External => {},
            other => return Err(GearError::InvalidMate(other)),
        }
        if self.tooth_count == 0 {
            return Err(GearError::ZeroToothCount(GearType::External));
        }
        let tooth_count = i32::try_from(self.tooth_count).map_err(|_| {
            GearError::InvalidParameter {
                name: "tooth_count",
                value: self.tooth_count as Real,
                reason: "too many teeth",
            }
        })?;
        let spec = GearSpec::builder()
            .tooth_count(tooth_count)
            .circular_pitch(self.circular_pitch)
            .pressure_angle(self.pressure_angle)
            .clearance(-self.clearance)
            .backlash(-self.backlash)
            .profile_shift(self.profile_shift)
            .center_hole_diameter(0.0)
            .quality(self.quality)
            .build()?;
        Gear::new(spec)
    }
}
