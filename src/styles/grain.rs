use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use crate::config::GrainConfig;
use crate::error::GrainError;
use crate::photo::{ops, Photo};

/// Gray level the noise is centred on
pub const NEUTRAL_LEVEL: f32 = 128.0;

/// Strength of a grain pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainParams {
    /// Standard deviation of the per-channel noise
    pub intensity: f32,

    /// Weight of the noise layer in the final mix (0.0-1.0)
    pub blend: f32,
}

impl GrainParams {
    pub const fn new(intensity: f32, blend: f32) -> Self {
        Self { intensity, blend }
    }
}

/// Film grain generator
///
/// Owns its random source so that each worker of a batch can hold an
/// independent, optionally seeded, generator.
pub struct GrainSynthesizer {
    rng: StdRng,
}

impl GrainSynthesizer {
    /// Grain seeded from the operating system
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible grain
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Build the generator for batch job `stream`
    ///
    /// With a configured seed, job `i` uses `seed + i`.
    pub fn from_config(config: &GrainConfig, stream: u64) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed.wrapping_add(stream)),
            None => Self::from_entropy(),
        }
    }

    /// Generate a `width` x `height` layer of gray noise
    ///
    /// Each sample is drawn independently from N(128, intensity) and clipped.
    pub fn noise_layer(&mut self, width: u32, height: u32, intensity: f32) -> Result<Photo, GrainError> {
        // Normal::new only rejects non-finite deviations
        if !(intensity.is_finite() && intensity >= 0.0) {
            return Err(GrainError::InvalidIntensity { intensity });
        }
        let normal = Normal::new(0.0_f32, intensity)
            .map_err(|_| GrainError::InvalidIntensity { intensity })?;

        let expected = width as usize * height as usize * 3;
        let data: Vec<u8> = (&mut self.rng)
            .sample_iter(normal)
            .take(expected)
            .map(|n| (NEUTRAL_LEVEL + n).round().clamp(0.0, 255.0) as u8)
            .collect();

        let actual = data.len();
        Photo::from_rgb_bytes(width, height, data).ok_or(GrainError::SampleCount {
            width,
            height,
            expected,
            actual,
        })
    }

    /// Mix fresh noise into the photo: `(1 - blend) * photo + blend * noise`
    pub fn add_grain(&mut self, photo: &Photo, params: GrainParams) -> Result<Photo, GrainError> {
        if !(0.0..=1.0).contains(&params.blend) {
            return Err(GrainError::InvalidBlend { blend: params.blend });
        }

        let noise = self.noise_layer(photo.width(), photo.height(), params.intensity)?;
        ops::blend(photo, &noise, params.blend).ok_or(GrainError::BufferMismatch {
            expected: photo.dimensions(),
            actual: noise.dimensions(),
        })
    }
}

impl Default for GrainSynthesizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
