use crate::{
    error::Result,
    photo::Photo,
    styles::grain::GrainSynthesizer,
    styles::traits::{Style, StyleKind},
};

/// No frame: the photo passes through unchanged
pub struct OriginalFrame;

impl OriginalFrame {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OriginalFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for OriginalFrame {
    fn name(&self) -> &str {
        "original"
    }

    fn description(&self) -> &str {
        "No border"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Frame
    }

    fn apply(&self, photo: Photo, _grain: &mut GrainSynthesizer) -> Result<Photo> {
        Ok(photo)
    }
}
