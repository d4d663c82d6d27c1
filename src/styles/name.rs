use std::fmt;

use crate::error::{Result, StyleError};

/// A `frame` or `frame_color` style name
///
/// The name is split on its first underscore only, so color keys may
/// themselves contain underscores (`polaroid_bw_high_contrast`). Frame keys
/// therefore never contain one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundStyleName {
    frame: String,
    color: Option<String>,
}

impl CompoundStyleName {
    /// Split a compound name; catalog membership is checked by the registry
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(StyleError::EmptyName.into());
        }

        let (frame, color) = match name.split_once('_') {
            Some((frame, color)) => (frame, Some(color.to_string())),
            None => (name, None),
        };

        if frame.is_empty() {
            return Err(StyleError::UnsupportedFrame { key: String::new() }.into());
        }
        if color.as_deref() == Some("") {
            return Err(StyleError::UnsupportedColor { key: String::new() }.into());
        }

        Ok(Self {
            frame: frame.to_string(),
            color,
        })
    }

    pub fn new<F: Into<String>>(frame: F, color: Option<String>) -> Self {
        Self {
            frame: frame.into(),
            color,
        }
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl fmt::Display for CompoundStyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.color {
            Some(color) => write!(f, "{}_{}", self.frame, color),
            None => write!(f, "{}", self.frame),
        }
    }
}
