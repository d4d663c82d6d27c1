use crate::{
    error::Result,
    photo::{Channel, Photo},
    styles::grain::{GrainParams, GrainSynthesizer},
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{develop, Adjustment};

const STEPS: [Adjustment; 5] = [
    Adjustment::Saturation(0.65),
    Adjustment::Contrast(0.85),
    Adjustment::Scale(Channel::Red, 1.05),
    Adjustment::Scale(Channel::Blue, 0.95),
    Adjustment::Brightness(1.1),
];

const GRAIN: GrainParams = GrainParams::new(5.0, 0.03);

/// Faded vintage print: muted colors, soft contrast, a warm cast and fine grain
pub struct VintageStyle;

impl VintageStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VintageStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for VintageStyle {
    fn name(&self) -> &str {
        "vintage"
    }

    fn description(&self) -> &str {
        "Faded print with reduced saturation and contrast, a slightly warm cast and fine grain"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Color
    }

    fn apply(&self, photo: Photo, grain: &mut GrainSynthesizer) -> Result<Photo> {
        develop(photo, &STEPS, GRAIN, grain)
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

    fn chroma(photo: &Photo) -> f64 {
        let total: u64 = photo
            .as_raw()
            .chunks_exact(3)
            .map(|px| (px.iter().max().unwrap() - px.iter().min().unwrap()) as u64)
            .sum();
        total as f64 / (photo.as_raw().len() / 3) as f64
    }

    #[test]
    fn test_vintage_desaturates() {
        let mut photo = Photo::new_filled(30, 10, [0, 0, 0]);
        for y in 0..10 {
            for x in 0..30 {
                let color = match x % 3 {
                    0 => [200, 50, 50],
                    1 => [50, 200, 50],
                    _ => [50, 50, 200],
                };
                photo.set_pixel(x, y, color);
            }
        }

        let out = VintageStyle::new()
            .apply(photo.clone(), &mut GrainSynthesizer::seeded(1))
            .unwrap();
        assert_eq!(out.dimensions(), photo.dimensions());
        assert!(chroma(&out) < chroma(&photo) * 0.8);
    }
}
