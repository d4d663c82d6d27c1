use crate::{
    error::Result,
    photo::Photo,
    styles::grain::GrainSynthesizer,
    styles::traits::{Style, StyleKind, StyleMetadata},
};

use super::{margin_for, mount, Margins};

/// Side and top border as a share of the photo width
pub const SIDE_RATIO: f64 = 0.075;

/// Bottom border as a share of the photo height
pub const BOTTOM_RATIO: f64 = 0.14;

/// Instant-print frame with a deep bottom border
pub struct PolaroidFrame;

impl PolaroidFrame {
    pub fn new() -> Self {
        Self
    }

    pub fn margins(width: u32, height: u32) -> Margins {
        let side = margin_for(width, SIDE_RATIO);
        Margins {
            left: side,
            top: side,
            right: side,
            bottom: margin_for(height, BOTTOM_RATIO),
        }
    }
}

impl Default for PolaroidFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for PolaroidFrame {
    fn name(&self) -> &str {
        "polaroid"
    }

    fn description(&self) -> &str {
        "White instant-print border, 7.5% of the width on three sides and 14% of the height below"
    }

    fn kind(&self) -> StyleKind {
        StyleKind::Frame
    }

    fn apply(&self, photo: Photo, _grain: &mut GrainSynthesizer) -> Result<Photo> {
        Ok(mount(&photo, Self::margins(photo.width(), photo.height())))
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            grain: None,
            preserves_dimensions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polaroid_dimensions() {
        let photo = Photo::new_filled(1000, 800, [50, 60, 70]);
        let framed = PolaroidFrame::new()
            .apply(photo, &mut GrainSynthesizer::seeded(0))
            .unwrap();
        // 75 on each side and the top, 112 below
        assert_eq!(framed.dimensions(), (1150, 987));
        assert_eq!(framed.get_pixel(75, 75), [50, 60, 70]);
        assert_eq!(framed.get_pixel(575, 950), [255, 255, 255]);
    }

    #[test]
    fn test_margins_round() {
        // 30 * 0.075 = 2.25, 25 * 0.14 = 3.5
        let margins = PolaroidFrame::margins(30, 25);
        assert_eq!(margins.left, 2);
        assert_eq!(margins.bottom, 4);
    }
}
