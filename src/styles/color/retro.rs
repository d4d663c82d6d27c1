use crate::{
    error::Result,
    photo::{Channel, Photo},
    styles::grain::{GrainParams, GrainSynthesizer},
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{develop, Adjustment};

/// Decade of consumer color film being emulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetroDecade {
    Sixties,
    Seventies,
    Eighties,
}

/// Saturated consumer color film by decade
pub struct RetroStyle {
    decade: RetroDecade,
}

impl RetroStyle {
    pub fn new(decade: RetroDecade) -> Self {
        Self { decade }
    }

    fn steps(&self) -> [Adjustment; 3] {
        let (saturation, contrast, red) = match self.decade {
            RetroDecade::Sixties => (1.4, 1.2, 1.1),
            RetroDecade::Seventies => (1.2, 1.1, 1.2),
            RetroDecade::Eighties => (1.3, 1.15, 1.05),
        };
        [
            Adjustment::Saturation(saturation),
            Adjustment::Contrast(contrast),
            Adjustment::Scale(Channel::Red, red),
        ]
    }

    fn grain(&self) -> GrainParams {
        match self.decade {
            RetroDecade::Sixties => GrainParams::new(4.0, 0.04),
            RetroDecade::Seventies => GrainParams::new(6.0, 0.04),
            RetroDecade::Eighties => GrainParams::new(3.0, 0.04),
        }
    }
}

impl Style for RetroStyle {
    fn name(&self) -> &str {
        match self.decade {
            RetroDecade::Sixties => "retro_60s",
            RetroDecade::Seventies => "retro_70s",
            RetroDecade::Eighties => "retro_80s",
        }
    }

    fn description(&self) -> &str {
        match self.decade {
            RetroDecade::Sixties => "Vivid 1960s color with strong saturation",
            RetroDecade::Seventies => "Warm 1970s color with coarse grain",
            RetroDecade::Eighties => "Crisp 1980s color with a slight red push",
        }
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Color
    }

    fn apply(&self, photo: Photo, grain: &mut GrainSynthesizer) -> Result<Photo> {
        develop(photo, &self.steps(), self.grain(), grain)
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            grain: Some(self.grain()),
            preserves_dimensions: true,
        }
    }
}
