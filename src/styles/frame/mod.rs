//! # Frame Recipes
//!
//! Frames never resample the source: they allocate a larger white canvas,
//! paste the photo unchanged, and composite a faint 1px shadow around it.

mod original;
mod polaroid;
mod symmetric;

pub use original::OriginalFrame;
pub use polaroid::PolaroidFrame;
pub use symmetric::SymmetricFrame;

use image::Rgba;

use crate::photo::{ops, Photo, Rect};

/// Canvas background
pub const CANVAS_COLOR: [u8; 3] = [255, 255, 255];

/// Near-transparent gray used for the shadow outline
pub const SHADOW_COLOR: Rgba<u8> = Rgba([128, 128, 128, 20]);

/// Border widths in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Margins {
    pub fn uniform(margin: u32) -> Self {
        Self {
            left: margin,
            top: margin,
            right: margin,
            bottom: margin,
        }
    }

    /// Final canvas size for a photo of the given size
    pub fn canvas_size(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width + self.left + self.right,
            height + self.top + self.bottom,
        )
    }
}

/// `round(length * ratio)` in pixels
pub(crate) fn margin_for(length: u32, ratio: f64) -> u32 {
    (length as f64 * ratio).round() as u32
}

/// Paste the photo onto a white canvas grown by `margins`
pub(crate) fn mount(photo: &Photo, margins: Margins) -> Photo {
    let (width, height) = margins.canvas_size(photo.width(), photo.height());
    let mut canvas = Photo::new_filled(width, height, CANVAS_COLOR);
    ops::paste(&mut canvas, photo, margins.left, margins.top);
    ops::draw_outline(
        &mut canvas,
        Rect {
            x: margins.left,
            y: margins.top,
            width: photo.width(),
            height: photo.height(),
        },
        SHADOW_COLOR,
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_keeps_interior() {
        let mut photo = Photo::new_filled(10, 6, [10, 20, 30]);
        photo.set_pixel(9, 5, [1, 2, 3]);
        let margins = Margins { left: 2, top: 3, right: 4, bottom: 5 };

        let canvas = mount(&photo, margins);
        assert_eq!(canvas.dimensions(), (16, 14));
        for y in 0..6 {
            for x in 0..10 {
                assert_eq!(canvas.get_pixel(x + 2, y + 3), photo.get_pixel(x, y));
            }
        }
        assert_eq!(canvas.get_pixel(0, 0), CANVAS_COLOR);
        assert_eq!(canvas.get_pixel(15, 13), CANVAS_COLOR);

        // shadow sits just outside the photo
        let shadow = canvas.get_pixel(1, 2);
        assert!(shadow[0] < 255 && shadow[0] > 200);
    }

    #[test]
    fn test_zero_margins_leave_photo_alone() {
        let photo = Photo::new_filled(3, 3, [7, 7, 7]);
        assert_eq!(mount(&photo, Margins::uniform(0)), photo);
    }
}
