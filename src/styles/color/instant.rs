use crate::{
    error::Result,
    photo::{Channel, Photo},
    styles::grain::{GrainParams, GrainSynthesizer},
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{develop, Adjustment};

/// Decade of instant film being emulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantEra {
    Seventies,
    Eighties,
    Nineties,
}

const GRAIN: GrainParams = GrainParams::new(4.0, 0.03);

/// Instant film: boosted saturation with an era-specific color cast
pub struct InstantStyle {
    era: InstantEra,
}

impl InstantStyle {
    pub fn new(era: InstantEra) -> Self {
        Self { era }
    }

    fn steps(&self) -> [Adjustment; 3] {
        let saturation = Adjustment::Saturation(1.2);
        match self.era {
            InstantEra::Seventies => [
                saturation,
                Adjustment::Scale(Channel::Green, 1.1),
                Adjustment::Scale(Channel::Blue, 0.9),
            ],
            InstantEra::Eighties => [
                saturation,
                Adjustment::Scale(Channel::Red, 1.15),
                Adjustment::Scale(Channel::Blue, 0.85),
            ],
            InstantEra::Nineties => [
                saturation,
                Adjustment::Scale(Channel::Red, 1.05),
                Adjustment::Scale(Channel::Green, 1.02),
            ],
        }
    }
}

impl Style for InstantStyle {
    fn name(&self) -> &str {
        match self.era {
            InstantEra::Seventies => "instant_70s",
            InstantEra::Eighties => "instant_80s",
            InstantEra::Nineties => "instant_90s",
        }
    }

    fn description(&self) -> &str {
        match self.era {
            InstantEra::Seventies => "1970s instant film with a greenish cast",
            InstantEra::Eighties => "1980s instant film with warm, red-leaning tones",
            InstantEra::Nineties => "1990s instant film with natural, lightly warmed color",
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
