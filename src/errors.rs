//! Configuration and synthesis errors

use crate::float_types::Real;
use crate::gear::GearType;

/// All the ways building a gear can fail.
///
/// Configuration errors are raised before any geometry is generated.
/// [`GearError::Synthesis`] is raised while a specific gear is being cut.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GearError {
    /// (MissingPitch) Neither circular pitch nor diametral pitch was given
    #[error("(MissingPitch) a gear needs either a circular pitch or a diametral pitch")]
    MissingPitch,
    /// (InvalidPitch) The pitch is zero, negative, NaN or infinite
    #[error("(InvalidPitch) pitch must be a positive finite number, got {0}")]
    InvalidPitch(Real),
    /// (ZeroToothCount) A gear that is not a rack resolved to zero teeth
    #[error("(ZeroToothCount) a {0} gear needs a non-zero tooth count")]
    ZeroToothCount(GearType),
    /// (NonPositivePitchRadius) The envelope sweep would never terminate
    #[error("(NonPositivePitchRadius) pitch radius must be > 0, got {0}")]
    NonPositivePitchRadius(Real),
    /// (NonPositiveStepSize) The envelope sweep would never terminate
    #[error("(NonPositiveStepSize) angle step size must be > 0, got {0}")]
    NonPositiveStepSize(Real),
    /// (InvalidResolution) Arcs need at least three segments per full turn
    #[error("(InvalidResolution) resolution must be at least 3, got {0}")]
    InvalidResolution(usize),
    /// (InvalidParameter) A parameter is out of its valid range
    #[error("(InvalidParameter) {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    /// (UnknownQuality) The quality option is not one of 0, 1, 2
    #[error("(UnknownQuality) quality option must be 0, 1 or 2, got {0}")]
    UnknownQuality(u8),
    /// (EmptySelection) The display mask selects neither gear
    #[error("(EmptySelection) show option {0} selects no gear (use 1, 2 or 3)")]
    EmptySelection(u8),
    /// (MissingMate) An internal gear is cut by its mating pinion, which was not given
    #[error("(MissingMate) an internal gear needs the parameters of its mating pinion")]
    MissingMate,
    /// (InvalidMate) The mating gear cannot act as a pinion cutter
    #[error("(InvalidMate) an internal gear can only be cut by an external pinion, got a {0}")]
    InvalidMate(GearType),
    /// The geometry engine produced something the synthesis cannot continue from
    #[error("(Synthesis) {gear}: {reason}")]
    Synthesis { gear: String, reason: String },
}

impl GearError {
    /// `true` for every error raised before geometry generation starts.
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, GearError::Synthesis { .. })
    }

    pub(crate) fn synthesis(gear: impl Into<String>, reason: impl Into<String>) -> Self {
        GearError::Synthesis {
            gear: gear.into(),
            reason: reason.into(),
        }
    }
}
