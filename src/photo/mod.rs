//! # Photo Buffers
//!
//! Thin adapter over the `image` crate: the [`Photo`] buffer, the tone
//! operations the recipes are built from, and JPEG/PNG loading and saving.

pub mod encoder;
pub mod loader;
pub mod ops;
pub mod types;

pub use encoder::{OutputFormat, PhotoEncoder};
pub use loader::PhotoLoader;
pub use ops::{Channel, Rect};
pub use types::Photo;
