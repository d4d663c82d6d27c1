use crate::{
    error::Result,
    photo::Photo,
    styles::grain::{GrainParams, GrainSynthesizer},
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{develop, Adjustment};

/// Black and white film rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BwFilm {
    Classic,
    HighContrast,
    Soft,
}

const GRAIN: GrainParams = GrainParams::new(8.0, 0.05);

/// Monochrome film with heavy grain
pub struct BwFilmStyle {
    film: BwFilm,
}

impl BwFilmStyle {
    pub fn new(film: BwFilm) -> Self {
        Self { film }
    }

    fn steps(&self) -> Vec<Adjustment> {
        let mut steps = vec![Adjustment::Grayscale];
        match self.film {
            BwFilm::Classic => steps.push(Adjustment::Contrast(1.2)),
            BwFilm::HighContrast => steps.push(Adjustment::Contrast(1.5)),
            BwFilm::Soft => {
                steps.push(Adjustment::Contrast(0.8));
                steps.push(Adjustment::Brightness(1.2));
            }
        }
        steps
    }
}

impl Style for BwFilmStyle {
    fn name(&self) -> &str {
        match self.film {
            BwFilm::Classic => "bw_classic",
            BwFilm::HighContrast => "bw_high_contrast",
            BwFilm::Soft => "bw_soft",
        }
    }

    fn description(&self) -> &str {
        match self.film {
            BwFilm::Classic => "Classic black and white film with a moderate contrast boost",
            BwFilm::HighContrast => "Punchy black and white with deep shadows",
            BwFilm::Soft => "Low-contrast, bright black and white",
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
