//! # Photo Style System
//!
//! This module provides the two style catalogs and the grain synthesizer
//! the color recipes share. A style is selected by a compound name:
//! `frame` or `frame_color`.
//!
//! ## Built-in Styles
//!
//! - **Frames**: original, polaroid, symmetric
//! - **Vintage**: faded print
//! - **Black and white**: bw_classic, bw_high_contrast, bw_soft
//! - **Instant**: instant_70s, instant_80s, instant_90s
//! - **Cross-process**: cross_light, cross_process, cross_strong
//! - **Cinematic**: cinematic_kodak, cinematic_fuji, cinematic_vision3
//! - **Retro**: retro_60s, retro_70s, retro_80s
//!
//! ## Usage
//!
//! ```rust,no_run
//! use film_styler::photo::Photo;
//! use film_styler::styles::{GrainSynthesizer, StyleRegistry};
//!
//! # fn main() -> film_styler::Result<()> {
//! let registry = StyleRegistry::new();
//! let resolved = registry.resolve("polaroid_bw_classic")?;
//!
//! let mut grain = GrainSynthesizer::seeded(42);
//! let mut photo = Photo::new_filled(640, 480, [90, 120, 160]);
//! if let Some(color) = &resolved.color {
//!     photo = color.apply(photo, &mut grain)?;
//! }
//! let framed = resolved.frame.apply(photo, &mut grain)?;
//! # Ok(())
//! # }
//! ```

pub mod grain;
pub mod name;
pub mod registry;
pub mod traits;

// Style implementations
pub mod color;
pub mod frame;

// Re-exports for convenience
pub use grain::{GrainParams, GrainSynthesizer};
pub use name::CompoundStyleName;
pub use registry::{ResolvedStyle, StyleCatalog, StyleRegistry, SupportedStyles};
pub use traits::{Style, StyleKind, StyleMetadata};

// Re-export all built-in styles
pub use color::{
    BwFilm, BwFilmStyle, CinematicStyle, CrossProcessStrength, CrossProcessStyle, FilmStock,
    InstantEra, InstantStyle, RetroDecade, RetroStyle, VintageStyle,
};
pub use frame::{OriginalFrame, PolaroidFrame, SymmetricFrame};
