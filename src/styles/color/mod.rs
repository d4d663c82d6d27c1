//! # Color Recipes
//!
//! Film-stock inspired color grades. Each recipe is an ordered list of
//! [`Adjustment`]s followed by a grain pass; every step clips to `0..=255`
//! before the next one runs.

mod bw;
mod cinematic;
mod cross_process;
mod instant;
mod retro;
mod vintage;

pub use bw::{BwFilm, BwFilmStyle};
pub use cinematic::{CinematicStyle, FilmStock};
pub use cross_process::{CrossProcessStrength, CrossProcessStyle};
pub use instant::{InstantEra, InstantStyle};
pub use retro::{RetroDecade, RetroStyle};
pub use vintage::VintageStyle;

use crate::{
    error::Result,
    photo::{ops, Channel, Photo},
    styles::grain::{GrainParams, GrainSynthesizer},
};

/// A single tone step of a color recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Luma reduction expanded back to three identical channels
    Grayscale,
    Saturation(f64),
    Contrast(f64),
    Brightness(f64),
    /// Multiplicative scale of one channel
    Scale(Channel, f64),
}

impl Adjustment {
    /// Apply the step to the photo's own buffer
    pub fn apply(self, mut photo: Photo) -> Photo {
        match self {
            Adjustment::Grayscale => ops::grayscale(&mut photo),
            Adjustment::Saturation(factor) => ops::adjust_saturation(&mut photo, factor),
            Adjustment::Contrast(factor) => ops::adjust_contrast(&mut photo, factor),
            Adjustment::Brightness(factor) => ops::adjust_brightness(&mut photo, factor),
            Adjustment::Scale(channel, factor) => ops::scale_channel(&mut photo, channel, factor),
        }
        photo
    }
}

/// Run the adjustments in order, then the grain pass
pub(crate) fn develop(
    photo: Photo,
    steps: &[Adjustment],
    grain_params: GrainParams,
    grain: &mut GrainSynthesizer,
) -> Result<Photo> {
    let developed = steps.iter().fold(photo, |photo, step| step.apply(photo));
    Ok(grain.add_grain(&developed, grain_params)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_run_in_order() {
        let photo = Photo::new_filled(1, 1, [100, 100, 100]);

        // 100 * 1.2 = 120, truncated by 0.5 to 60
        let a = [Adjustment::Brightness(1.2), Adjustment::Scale(Channel::Red, 0.5)]
            .iter()
            .fold(photo.clone(), |p, s| s.apply(p));
        assert_eq!(a.get_pixel(0, 0), [60, 120, 120]);

        // 100 * 2.0 clips to 200, then brightness 1.5 clips to 255
        let b = [Adjustment::Scale(Channel::Red, 2.0), Adjustment::Brightness(1.5)]
            .iter()
            .fold(photo, |p, s| s.apply(p));
        assert_eq!(b.get_pixel(0, 0), [255, 150, 150]);
    }

    #[test]
    fn test_steps_reuse_the_buffer() {
        let mut photo = Photo::new_filled(8, 8, [0, 0, 0]);
        photo.set_pixel(3, 3, [200, 40, 90]);
        let buffer = photo.as_raw().as_ptr();

        let out = [
            Adjustment::Grayscale,
            Adjustment::Saturation(0.65),
            Adjustment::Contrast(1.2),
            Adjustment::Brightness(1.1),
            Adjustment::Scale(Channel::Red, 1.05),
        ]
        .iter()
        .fold(photo, |p, s| s.apply(p));

        assert_eq!(out.as_raw().as_ptr(), buffer);
    }

    #[test]
    fn test_develop_without_grain_weight() {
        let photo = Photo::new_filled(4, 4, [40, 80, 120]);
        let mut grain = GrainSynthesizer::seeded(5);
        let out = develop(
            photo.clone(),
            &[Adjustment::Saturation(1.0)],
            GrainParams::new(8.0, 0.0),
            &mut grain,
        )
        .unwrap();
        assert_eq!(out, photo);
    }
}
