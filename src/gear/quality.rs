//! Tessellation and sweep density presets.

use crate::errors::GearError;

/// How finely arcs are tessellated and how densely the cutter sweep samples
/// one tooth-to-tooth angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualitySettings {
    /// Segments per full turn
    pub resolution: usize,
    /// Cutter placements per tooth-to-tooth angle
    pub steps_per_tooth_angle: usize,
}

impl QualitySettings {
    pub const fn new(resolution: usize, steps_per_tooth_angle: usize) -> Self {
        QualitySettings {
            resolution,
            steps_per_tooth_angle,
        }
    }

    pub fn validate(&self) -> Result<(), GearError> {
        if self.resolution < 3 {
            return Err(GearError::InvalidResolution(self.resolution));
        }
        if self.steps_per_tooth_angle == 0 {
            return Err(GearError::NonPositiveStepSize(0.0));
        }
        Ok(())
    }
}

impl Default for QualitySettings {
    fn default() -> Self {
        QualityPreset::default().settings()
    }
}

/// The three named quality levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QualityPreset {
    /// Option 0
    #[default]
    Draft,
    /// Option 1
    Normal,
    /// Option 2
    High,
}

impl QualityPreset {
    pub const fn settings(self) -> QualitySettings {
        match self {
            QualityPreset::Draft => QualitySettings::new(30, 3),
            QualityPreset::Normal => QualitySettings::new(180, 10),
            QualityPreset::High => QualitySettings::new(360, 20),
        }
    }

    pub const fn from_option(option: u8) -> Result<Self, GearError> {
        match option {
            0 => Ok(QualityPreset::Draft),
            1 => Ok(QualityPreset::Normal),
            2 => Ok(QualityPreset::High),
            other => Err(GearError::UnknownQuality(other)),
        }
    }
}

impl TryFrom<u8> for QualityPreset {
    type Error = GearError;

    fn try_from(option: u8) -> Result<Self, Self::Error> {
        QualityPreset::from_option(option)
    }
}

impl From<QualityPreset> for QualitySettings {
    fn from(preset: QualityPreset) -> Self {
        preset.settings()
    }
}
