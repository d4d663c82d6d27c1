use crate::{
    error::Result,
    photo::{Channel, Photo},
    styles::grain::{GrainParams, GrainSynthesizer},
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{develop, Adjustment};

/// How hard the cross-processed look is pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossProcessStrength {
    Light,
    Process,
    Strong,
}

impl CrossProcessStrength {
    /// Multiplier `k` applied to every adjustment delta
    pub fn factor(self) -> f64 {
        match self {
            CrossProcessStrength::Light => 0.7,
            CrossProcessStrength::Process => 1.0,
            CrossProcessStrength::Strong => 1.3,
        }
    }
}

const GRAIN: GrainParams = GrainParams::new(6.0, 0.05);

/// Slide film developed in negative chemistry: hard contrast, loud color, shifted channels
pub struct CrossProcessStyle {
    strength: CrossProcessStrength,
}

impl CrossProcessStyle {
    pub fn new(strength: CrossProcessStrength) -> Self {
        Self { strength }
    }

    fn steps(&self) -> [Adjustment; 4] {
        let k = self.strength.factor();
        [
            Adjustment::Contrast(1.0 + 0.3 * k),
            Adjustment::Saturation(1.0 + 0.4 * k),
            Adjustment::Scale(Channel::Red, 1.0 + 0.1 * k),
            Adjustment::Scale(Channel::Blue, 1.0 - 0.1 * k),
        ]
    }
}

impl Style for CrossProcessStyle {
    fn name(&self) -> &str {
        match self.strength {
            CrossProcessStrength::Light => "cross_light",
            CrossProcessStrength::Process => "cross_process",
            CrossProcessStrength::Strong => "cross_strong",
        }
    }

    fn description(&self) -> &str {
        match self.strength {
            CrossProcessStrength::Light => "Gentle cross-processing",
            CrossProcessStrength::Process => "Cross-processed slide film with boosted contrast and color",
            CrossProcessStrength::Strong => "Heavy cross-processing",
        }
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Color
    }

    fn apply(&self, photo: Photo, grain: &mut GrainSynthesizer) -> Result<Photo> {
        develop(photo, &self.steps(), GRAIN, grain)
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            grain: Some(GRAIN),
            preserves_dimensions: true,
        }
    }
}
