//! # Film-Styler
//!
//! Give your photos an analog look: film-stock color grades, film grain and
//! instant-print borders.
//!
//! This library provides a complete toolkit for loading a JPEG or PNG photo,
//! applying a compound `frame_color` style and writing the result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use film_styler::{config::Config, pipeline::StylePipeline, styles::GrainSynthesizer};
//!
//! # fn main() -> film_styler::Result<()> {
//! let config = Config::default();
//! let pipeline = StylePipeline::new(&config);
//! let mut grain = GrainSynthesizer::from_entropy();
//!
//! pipeline.apply_file(
//!     "input.jpg",
//!     "polaroid_cinematic_kodak",
//!     "output/polaroid_cinematic_kodak.jpg",
//!     &mut grain,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`photo`] - Photo buffers, tone operations, loading and encoding
//! - [`styles`] - Frame and color recipes, grain and the style registry
//! - [`pipeline`] - Single renders and parallel batches
//! - [`config`] - Configuration management
//!
//! ## Creating Custom Styles
//!
//! You can add your own recipes by implementing the [`Style`](styles::Style) trait
//! and registering a factory:
//!
//! ```rust,no_run
//! use film_styler::photo::Photo;
//! use film_styler::styles::{GrainSynthesizer, Style, StyleKind, StyleRegistry};
//! use film_styler::Result;
//!
//! struct Sepia;
//!
//! impl Style for Sepia {
//!     fn name(&self) -> &str {
//!         "sepia"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Warm brown monochrome"
//!     }
//!
//!     fn kind(&self) -> StyleKind {
//!         StyleKind::Color
//!     }
//!
//!     fn apply(&self, photo: Photo, _grain: &mut GrainSynthesizer) -> Result<Photo> {
//!         // Your custom recipe
//!         Ok(photo)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut registry = StyleRegistry::new();
//! registry.register_color("sepia", || Box::new(Sepia))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod photo;
pub mod pipeline;
pub mod styles;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{Result, StylerError},
    photo::Photo,
    pipeline::StylePipeline,
    styles::{GrainSynthesizer, Style, StyleRegistry},
};
