use crate::{
    error::Result,
    photo::Photo,
    styles::grain::GrainSynthesizer,
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{margin_for, mount, Margins};

/// Border on every side as a share of the photo width
pub const MARGIN_RATIO: f64 = 0.075;

/// Even white border on all four sides
pub struct SymmetricFrame;

impl SymmetricFrame {
    pub fn new() -> Self {
        Self
    }

    pub fn margins(width: u32) -> Margins {
        Margins::uniform(margin_for(width, MARGIN_RATIO))
    }
}

impl Default for SymmetricFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for SymmetricFrame {
    fn name(&self) -> &str {
        "symmetric"
    }

    fn description(&self) -> &str {
        "White border of 7.5% of the width on all four sides"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Frame
    }

    fn apply(&self, photo: Photo, _grain: &mut GrainSynthesizer) -> Result<Photo> {
        Ok(mount(&photo, Self::margins(photo.width())))
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            grain: None,
            preserves_dimensions: false,
        }
    }
}
