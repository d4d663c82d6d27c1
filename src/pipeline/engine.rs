use std::path::Path;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::Result,
    photo::{OutputFormat, Photo, PhotoEncoder, PhotoLoader},
    styles::{GrainSynthesizer, ResolvedStyle, StyleRegistry},
};

/// Orchestrates one styled render
///
/// The pipeline follows a strict order:
/// 1. Validation - Resolve both catalog keys and the output format
/// 2. Color - Apply the color recipe, if the name has one
/// 3. Frame - Apply the frame recipe to the working photo
/// 4. Output - Encode and write the final photo
///
/// Every validation error is raised before the first write.
pub struct StylePipeline {
    registry: StyleRegistry,
    encoder: PhotoEncoder,
}

impl StylePipeline {
    /// Create a pipeline with the built-in styles
    pub fn new(config: &Config) -> Self {
        Self::with_registry(StyleRegistry::new(), config)
    }

    /// Create a pipeline over a custom registry
    pub fn with_registry(registry: StyleRegistry, config: &Config) -> Self {
        Self {
            registry,
            encoder: PhotoEncoder::new(config.output.clone()),
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Apply a compound style to a photo without writing it
    pub fn render(&self, photo: Photo, style_name: &str, grain: &mut GrainSynthesizer) -> Result<Photo> {
        let resolved = self.registry.resolve(style_name)?;
        self.run(photo, &resolved, grain)
    }

    /// Apply a compound style and persist the result to `output_path`
    pub fn apply<P: AsRef<Path>>(
        &self,
        photo: Photo,
        style_name: &str,
        output_path: P,
        grain: &mut GrainSynthesizer,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        // Pipeline Step 1: Validation
        let (resolved, format) = self.validate(style_name, output_path)?;

        self.write(photo, &resolved, output_path, format, grain)
    }

    /// Load `input_path`, apply a compound style and write `output_path`
    pub fn apply_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        style_name: &str,
        output_path: Q,
        grain: &mut GrainSynthesizer,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        // Pipeline Step 1: Validation, before decoding so a bad name fails fast
        let (resolved, format) = self.validate(style_name, output_path)?;

        info!("Loading {:?}", input_path);
        let photo = PhotoLoader::load(input_path)?;

        self.write(photo, &resolved, output_path, format, grain)
    }

    fn validate(&self, style_name: &str, output_path: &Path) -> Result<(ResolvedStyle, OutputFormat)> {
        let resolved = self.registry.resolve(style_name)?;
        let format = OutputFormat::from_path(output_path)?;
        debug!("Resolved '{}' -> {:?} output", resolved.name, format);
        Ok((resolved, format))
    }

    fn write(
        &self,
        photo: Photo,
        resolved: &ResolvedStyle,
        output_path: &Path,
        format: OutputFormat,
        grain: &mut GrainSynthesizer,
    ) -> Result<()> {
        // Pipeline Steps 2 & 3: Color, then frame
        let styled = self.run(photo, resolved, grain)?;

        // Pipeline Step 4: Output
        info!("   Saving {}x{} to {:?}", styled.width(), styled.height(), output_path);
        self.encoder.save_as(&styled, output_path, format)
    }

    fn run(&self, photo: Photo, resolved: &ResolvedStyle, grain: &mut GrainSynthesizer) -> Result<Photo> {
        info!("🎞️  Styling with '{}'", resolved.name);

        let mut working = photo;

        if let Some(color) = &resolved.color {
            info!("   Applying {} color...", color.name());
            working = color.apply(working, grain)?;
        }

        info!("   Applying {} frame...", resolved.frame.name());
        let framed = resolved.frame.apply(working, grain)?;

        debug!("Styled photo is {}x{}", framed.width(), framed.height());
        Ok(framed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StyleError, StylerError};
    use crate::styles::VintageStyle;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn sample() -> Photo {
        let mut photo = Photo::new_filled(40, 30, [0, 0, 0]);
        for y in 0..30 {
            for x in 0..40 {
                photo.set_pixel(x, y, [(x * 6) as u8, (y * 8) as u8, 150]);
            }
        }
        photo
    }

    #[test]
    fn test_every_combination_has_expected_size() {
        let pipeline = StylePipeline::new(&Config::default());
        let styles = pipeline.registry().supported_styles();
        let mut grain = GrainSynthesizer::seeded(11);

        for frame in &styles.frames {
            let expected = match frame.as_str() {
                "original" => (40, 30),
                // side 3, top 3, bottom round(4.2) = 4
                "polaroid" => (46, 37),
                "symmetric" => (46, 36),
                other => panic!("unexpected frame {}", other),
            };
            let bare = pipeline.render(sample(), frame, &mut grain).unwrap();
            assert_eq!(bare.dimensions(), expected);

            for color in &styles.effects {
                let name = format!("{}_{}", frame, color);
                let out = pipeline.render(sample(), &name, &mut grain).unwrap();
                assert_eq!(out.dimensions(), expected, "{}", name);
            }
        }
    }

    #[test]
    fn test_original_frame_without_color_is_identity() {
        let pipeline = StylePipeline::new(&Config::default());
        let out = pipeline
            .render(sample(), "original", &mut GrainSynthesizer::seeded(0))
            .unwrap();
        assert_eq!(out, sample());
    }

    #[test]
    fn test_seeded_renders_match() {
        let pipeline = StylePipeline::new(&Config::default());
        let a = pipeline
            .render(sample(), "symmetric_retro_70s", &mut GrainSynthesizer::seeded(5))
            .unwrap();
        let b = pipeline
            .render(sample(), "symmetric_retro_70s", &mut GrainSynthesizer::seeded(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_color_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out/polaroid_nonexistent.jpg");
        let pipeline = StylePipeline::new(&Config::default());

        let err = pipeline
            .apply(sample(), "polaroid_nonexistent", &output, &mut GrainSynthesizer::seeded(0))
            .unwrap_err();
        assert!(matches!(err, StylerError::Style(StyleError::UnsupportedColor { .. })));
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());
    }

    #[test]
    fn test_bad_output_extension_fails_before_render() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.gif");
        let pipeline = StylePipeline::new(&Config::default());

        let err = pipeline
            .apply(sample(), "polaroid", &output, &mut GrainSynthesizer::seeded(0))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(!output.exists());
    }

    #[test]
    fn test_apply_file_resolves_each_style_once() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.png");
        image::RgbImage::from_pixel(12, 10, image::Rgb([90, 140, 60]))
            .save(&input)
            .unwrap();

        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let mut registry = StyleRegistry::new();
        registry
            .register_color("counted", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Box::new(VintageStyle::new())
            })
            .unwrap();

        let pipeline = StylePipeline::with_registry(registry, &Config::default());
        let output = dir.path().join("out/polaroid_counted.png");
        pipeline
            .apply_file(&input, "polaroid_counted", &output, &mut GrainSynthesizer::seeded(4))
            .unwrap();

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(output.exists());
    }

    #[test]
    fn test_apply_file_reports_missing_input() {
        let dir = tempdir().unwrap();
        let pipeline = StylePipeline::new(&Config::default());
        let err = pipeline
            .apply_file(
                dir.path().join("missing.jpg"),
                "polaroid_vintage",
                dir.path().join("out.jpg"),
                &mut GrainSynthesizer::seeded(0),
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert!(!dir.path().join("out.jpg").exists());
    }
}
