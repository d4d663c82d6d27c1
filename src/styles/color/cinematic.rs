use crate::{
    error::Result,
    photo::{Channel, Photo},
    styles::grain::{GrainParams, GrainSynthesizer},
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{develop, Adjustment};

/// Motion picture film stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmStock {
    Kodak,
    Fuji,
    Vision3,
}

const GRAIN: GrainParams = GrainParams::new(3.0, 0.03);

/// Motion picture stock emulation with very fine grain
pub struct CinematicStyle {
    stock: FilmStock,
}

impl CinematicStyle {
    pub fn new(stock: FilmStock) -> Self {
        Self { stock }
    }

    fn steps(&self) -> [Adjustment; 3] {
        let (contrast, saturation, red) = match self.stock {
            FilmStock::Kodak => (1.2, 1.1, 1.1),
            FilmStock::Fuji => (1.1, 1.2, 0.95),
            FilmStock::Vision3 => (1.15, 1.05, 1.0),
        };
        [
            Adjustment::Contrast(contrast),
            Adjustment::Saturation(saturation),
            Adjustment::Scale(Channel::Red, red),
        ]
    }
}

impl Style for CinematicStyle {
    fn name(&self) -> &str {
        match self.stock {
            FilmStock::Kodak => "cinematic_kodak",
            FilmStock::Fuji => "cinematic_fuji",
            FilmStock::Vision3 => "cinematic_vision3",
        }
    }

    fn description(&self) -> &str {
        match self.stock {
            FilmStock::Kodak => "Warm Kodak cinema stock",
            FilmStock::Fuji => "Cool, saturated Fuji cinema stock",
            FilmStock::Vision3 => "Neutral Vision3 stock with wide latitude",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kodak_warmer_than_fuji() {
        let gray = Photo::new_filled(1, 1, [120, 120, 120]);
        let red = |stock| {
            CinematicStyle::new(stock)
                .steps()
                .iter()
                .fold(gray.clone(), |p, s| s.apply(p))
                .get_pixel(0, 0)[0]
        };
        assert_eq!(red(FilmStock::Kodak), 132);
        assert_eq!(red(FilmStock::Vision3), 120);
        assert_eq!(red(FilmStock::Fuji), 114);
    }
}
