use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    photo::Photo,
    styles::grain::{GrainParams, GrainSynthesizer},
};

/// Which catalog a style belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Color and tone recipes (vintage, bw_classic, ...)
    Color,
    /// Border recipes (original, polaroid, symmetric)
    Frame,
}

/// Core trait that all photo styles must implement
pub trait Style: Send + Sync {
    /// Returns the catalog key of this style
    fn name(&self) -> &str;

    /// Returns a human-readable description of this style
    fn description(&self) -> &str;

    /// Returns the catalog this style lives in
    fn kind(&self) -> StyleKind;

    /// Apply the style, producing a new photo
    ///
    /// # Arguments
    ///
    /// * `photo` - The photo to transform; ownership lets recipes reuse the buffer
    /// * `grain` - Random source for recipes that finish with a grain pass
    ///
    /// # Returns
    ///
    /// Returns the transformed photo, or an error if processing failed.
    fn apply(&self, photo: Photo, grain: &mut GrainSynthesizer) -> Result<Photo>;

    /// Get style-specific metadata
    fn metadata(&self) -> StyleMetadata {
        StyleMetadata::default()
    }
}

/// Metadata about a style's characteristics
#[derive(Debug, Clone)]
pub struct StyleMetadata {
    /// Grain pass the style finishes with, if any
    pub grain: Option<GrainParams>,

    /// Whether the output has the same dimensions as the input
    pub preserves_dimensions: bool,
}

impl Default for StyleMetadata {
    fn default() -> Self {
        Self {
            grain: None,
            preserves_dimensions: true,
        }
    }
}
