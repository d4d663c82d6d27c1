use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};
use tracing::debug;

use crate::config::OutputConfig;
use crate::error::{OutputError, Result};
use crate::photo::Photo;

/// Container format of a written photo, picked from the output extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Resolve the format of an output path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(OutputError::UnsupportedFormat { format: extension }.into()),
        }
    }
}

/// Writes finished photos to disk
///
/// JPEG goes through `jpeg-encoder`, which honors the configured quality
/// together with progressive scans and optimized Huffman tables. PNG goes
/// through the `image` codec.
pub struct PhotoEncoder {
    config: OutputConfig,
}

impl PhotoEncoder {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Encode the photo in the format implied by `path` and write it
    pub fn save<P: AsRef<Path>>(&self, photo: &Photo, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        self.save_as(photo, path, format)
    }

    /// Encode the photo in memory and write it in one step
    ///
    /// Missing parent directories are created first. A failed encode leaves
    /// nothing on disk.
    pub fn save_as(&self, photo: &Photo, path: &Path, format: OutputFormat) -> Result<()> {
        let bytes = match format {
            OutputFormat::Jpeg => self.encode_jpeg(photo, path)?,
            OutputFormat::Png => self.encode_png(photo, path)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }

        std::fs::write(path, &bytes).map_err(|source| OutputError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }

    fn encode_jpeg(&self, photo: &Photo, path: &Path) -> Result<Vec<u8>> {
        let (width, height) = photo.dimensions();
        let too_large = || OutputError::TooLarge {
            path: path.display().to_string(),
            width,
            height,
        };
        let w = u16::try_from(width).map_err(|_| too_large())?;
        let h = u16::try_from(height).map_err(|_| too_large())?;

        let mut bytes = Vec::new();
        let mut encoder = jpeg_encoder::Encoder::new(&mut bytes, self.config.quality);
        encoder.set_progressive(self.config.progressive);
        encoder.set_optimized_huffman_tables(self.config.optimize);
        debug!(
            "JPEG q{} progressive={} optimize={}",
            self.config.quality, self.config.progressive, self.config.optimize
        );

        encoder
            .encode(photo.as_raw(), w, h, jpeg_encoder::ColorType::Rgb)
            .map_err(|source| OutputError::JpegEncodeFailed {
                path: path.display().to_string(),
                source,
            })?;

        Ok(bytes)
    }

    fn encode_png(&self, photo: &Photo, path: &Path) -> Result<Vec<u8>> {
        let (width, height) = photo.dimensions();
        let mut bytes = Vec::new();

        let encoder = if self.config.optimize {
            PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive)
        } else {
            PngEncoder::new(&mut bytes)
        };
        encoder
            .write_image(photo.as_raw(), width, height, ColorType::Rgb8)
            .map_err(|source| OutputError::EncodeFailed {
                path: path.display().to_string(),
                source,
            })?;

        Ok(bytes)
    }
}

impl Default for PhotoEncoder {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StylerError;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path("a/b.JPG").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path("b.jpeg").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path("b.png").unwrap(), OutputFormat::Png);

        let err = OutputFormat::from_path("b.tiff").unwrap_err();
        assert!(matches!(err, StylerError::Output(OutputError::UnsupportedFormat { .. })));
        assert!(err.is_validation());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.jpg");
        let photo = Photo::new_filled(8, 8, [120, 30, 200]);

        PhotoEncoder::default().save(&photo, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    /// Marker byte of the first start-of-frame segment
    fn frame_marker(bytes: &[u8]) -> Option<u8> {
        let mut pos = 2;
        while pos + 4 <= bytes.len() {
            if bytes[pos] != 0xFF {
                return None;
            }
            let marker = bytes[pos + 1];
            if (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
                return Some(marker);
            }
            let len = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
            pos += 2 + len;
        }
        None
    }

    fn gradient() -> Photo {
        let mut photo = Photo::new_filled(32, 24, [0, 0, 0]);
        for y in 0..24 {
            for x in 0..32 {
                photo.set_pixel(x, y, [(x * 8) as u8, (y * 10) as u8, 128]);
            }
        }
        photo
    }

    #[test]
    fn test_default_jpeg_is_progressive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        PhotoEncoder::default().save(&gradient(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(frame_marker(&bytes), Some(0xC2));

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 24));
    }

    #[test]
    fn test_baseline_jpeg_when_progressive_disabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let encoder = PhotoEncoder::new(OutputConfig {
            progressive: false,
            ..OutputConfig::default()
        });

        encoder.save(&gradient(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let marker = frame_marker(&bytes).unwrap();
        assert_ne!(marker, 0xC2);
    }

    #[test]
    fn test_png_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut photo = Photo::new_filled(3, 2, [0, 0, 0]);
        photo.set_pixel(1, 1, [9, 99, 199]);

        PhotoEncoder::default().save(&photo, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(1, 1).0, [9, 99, 199]);
    }
}
