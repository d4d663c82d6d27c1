use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::error::{InputError, Result};
use crate::photo::Photo;

/// Source photo loader accepting JPEG and PNG
pub struct PhotoLoader;

impl PhotoLoader {
    /// Load a photo, validating both the extension and the decoded content
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Photo> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(InputError::NotFound {
                path: path.display().to_string(),
            }.into());
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        if !matches!(extension.as_str(), "jpg" | "jpeg" | "png") {
            return Err(InputError::UnsupportedFormat { format: extension }.into());
        }

        let bytes = std::fs::read(path).map_err(|_| InputError::NotFound {
            path: path.display().to_string(),
        })?;

        let format = match image::guess_format(&bytes) {
            Ok(format @ (ImageFormat::Jpeg | ImageFormat::Png)) => format,
            Ok(other) => {
                return Err(InputError::UnsupportedFormat {
                    format: format!("{:?}", other).to_lowercase(),
                }.into());
            }
            Err(_) => {
                return Err(InputError::UnsupportedFormat {
                    format: "unknown".to_string(),
                }.into());
            }
        };

        let image = image::load_from_memory_with_format(&bytes, format)
            .map_err(|source| InputError::DecodeFailed {
                path: path.display().to_string(),
                source,
            })?;

        debug!("Decoded {:?}: {}x{} {:?}", path, image.width(), image.height(), image.color());

        Ok(Photo::from_dynamic(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StylerError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let err = PhotoLoader::load("no/such/input.jpg").unwrap_err();
        assert!(matches!(err, StylerError::Input(InputError::NotFound { .. })));
        assert!(err.is_validation());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.bmp");
        std::fs::write(&path, b"BM").unwrap();

        let err = PhotoLoader::load(&path).unwrap_err();
        assert!(matches!(
            err,
            StylerError::Input(InputError::UnsupportedFormat { ref format }) if format == "bmp"
        ));
    }

    #[test]
    fn test_content_must_be_jpeg_or_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"this is not an image").unwrap();

        let err = PhotoLoader::load(&path).unwrap_err();
        assert!(matches!(err, StylerError::Input(InputError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_loads_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.png");
        image::RgbImage::from_pixel(5, 4, image::Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        let photo = PhotoLoader::load(&path).unwrap();
        assert_eq!(photo.dimensions(), (5, 4));
        assert_eq!(photo.get_pixel(0, 0), [1, 2, 3]);
    }
}
