use thiserror::Error;

use crate::styles::SupportedStyles;

/// Main error type for the Film-Styler library
#[derive(Error, Debug)]
pub enum StylerError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Grain effect failed: {0}")]
    Grain(#[from] GrainError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised while locating and decoding the source photo
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("Unsupported input format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Failed to decode image: {path}")]
    DecodeFailed {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Style-name resolution errors
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("style name is empty")]
    EmptyName,

    #[error("unsupported color style: {key}")]
    UnsupportedColor { key: String },

    #[error("unsupported frame style: {key}")]
    UnsupportedFrame { key: String },

    #[error("invalid style key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

/// Failures of the grain synthesizer
#[derive(Error, Debug)]
pub enum GrainError {
    #[error("grain intensity {intensity} must be finite and non-negative")]
    InvalidIntensity { intensity: f32 },

    #[error("grain blend {blend} is outside 0.0..=1.0")]
    InvalidBlend { blend: f32 },

    #[error("noise layer is {actual:?} but the photo is {expected:?}")]
    BufferMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("noise layer for {width}x{height} needs {expected} samples, got {actual}")]
    SampleCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while encoding and persisting the result
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Unsupported output format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Failed to create output directory: {path}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image for {path}")]
    EncodeFailed {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode JPEG for {path}")]
    JpegEncodeFailed {
        path: String,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    #[error("{width}x{height} is too large to encode as JPEG: {path}")]
    TooLarge { path: String, width: u32, height: u32 },

    #[error("Failed to write output file: {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using StylerError
pub type Result<T> = std::result::Result<T, StylerError>;

impl StylerError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Whether this error was raised while validating inputs, before any output was touched
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Input(InputError::NotFound { .. })
                | Self::Input(InputError::UnsupportedFormat { .. })
                | Self::Output(OutputError::UnsupportedFormat { .. })
                | Self::Style(StyleError::EmptyName)
                | Self::Style(StyleError::UnsupportedColor { .. })
                | Self::Style(StyleError::UnsupportedFrame { .. })
        )
    }

    /// Get a user-friendly error message
    ///
    /// Unknown style keys are reported together with the keys in `styles`,
    /// which should come from the registry that rejected them.
    pub fn user_message(&self, styles: &SupportedStyles) -> String {
        match self {
            Self::Input(InputError::NotFound { path }) => {
                format!("Could not find input image '{}'. Please check the file exists.", path)
            }
            Self::Input(InputError::UnsupportedFormat { format }) => {
                format!("Input format '{}' is not supported. Use a JPEG or PNG image.", format)
            }
            Self::Style(StyleError::UnsupportedColor { key }) => {
                format!(
                    "Color style '{}' not found. Available color styles: {}",
                    key,
                    styles.effects.join(", ")
                )
            }
            Self::Style(StyleError::UnsupportedFrame { key }) => {
                format!(
                    "Frame style '{}' not found. Available frame styles: {}",
                    key,
                    styles.frames.join(", ")
                )
            }
            Self::Output(OutputError::UnsupportedFormat { format }) => {
                format!("Cannot write '{}' files. Use a .jpg, .jpeg or .png output path.", format)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::styles::StyleRegistry;

    #[test]
    fn test_style_errors_name_the_key() {
        let styles = StyleRegistry::new().supported_styles();

        let err: StylerError = StyleError::UnsupportedColor { key: "nonexistent".to_string() }.into();
        assert_eq!(err.to_string(), "Style error: unsupported color style: nonexistent");
        assert!(err.is_validation());
        assert!(err.user_message(&styles).contains("bw_classic"));

        let err: StylerError = StyleError::UnsupportedFrame { key: "circle".to_string() }.into();
        assert!(err.to_string().contains("unsupported frame style: circle"));
        assert!(err.user_message(&styles).contains("polaroid"));
    }

    #[test]
    fn test_user_message_lists_the_given_keys() {
        let styles = SupportedStyles {
            frames: vec!["postcard".to_string()],
            effects: vec!["sepia".to_string(), "vintage".to_string()],
        };

        let err: StylerError = StyleError::UnsupportedColor { key: "teal".to_string() }.into();
        let message = err.user_message(&styles);
        assert!(message.contains("'teal'"));
        assert!(message.ends_with("sepia, vintage"));
        assert!(!message.contains("bw_classic"));

        let err: StylerError = StyleError::UnsupportedFrame { key: "circle".to_string() }.into();
        assert!(err.user_message(&styles).ends_with("postcard"));
    }

    #[test]
    fn test_grain_error_is_not_validation() {
        let err: StylerError = GrainError::InvalidBlend { blend: 2.0 }.into();
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("Grain effect failed"));
    }

    #[test]
    fn test_write_failure_keeps_cause() {
        use std::error::Error as _;

        let err = OutputError::WriteFailed {
            path: "out/x.jpg".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        let err: StylerError = err.into();
        assert!(!err.is_validation());
    }
}
