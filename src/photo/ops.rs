//! Point-wise tone operations over [`Photo`] buffers.
//!
//! Every operation walks the interleaved sample buffer once and clips its
//! result into `0..=255`. The enhance-style adjustments (saturation,
//! contrast, brightness) interpolate between the photo and a "degenerate"
//! version of it: `degenerate + factor * (value - degenerate)`.

use image::{Pixel, Rgba};

use crate::photo::Photo;

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Rec.601 luma of an RGB triple
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

fn clip(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn interpolate(degenerate: f64, value: u8, factor: f64) -> u8 {
    clip(degenerate + factor * (value as f64 - degenerate))
}

/// Reduce to luma and expand back to three identical channels
pub fn grayscale(photo: &mut Photo) {
    for px in photo.samples_mut().chunks_exact_mut(3) {
        let y = clip(luma(px[0], px[1], px[2]));
        px.fill(y);
    }
}

/// Scale color saturation; `0.0` is grayscale, `1.0` is the identity
pub fn adjust_saturation(photo: &mut Photo, factor: f64) {
    for px in photo.samples_mut().chunks_exact_mut(3) {
        let gray = luma(px[0], px[1], px[2]).round();
        for c in px.iter_mut() {
            *c = interpolate(gray, *c, factor);
        }
    }
}

/// Scale contrast around the mean luma of the whole photo
pub fn adjust_contrast(photo: &mut Photo, factor: f64) {
    let pixels = photo.as_raw().len() / 3;
    if pixels == 0 {
        return;
    }

    let total: f64 = photo
        .as_raw()
        .chunks_exact(3)
        .map(|px| luma(px[0], px[1], px[2]).round())
        .sum();
    let mean = (total / pixels as f64).round();

    for c in photo.samples_mut().iter_mut() {
        *c = interpolate(mean, *c, factor);
    }
}

/// Scale brightness towards (or away from) black
pub fn adjust_brightness(photo: &mut Photo, factor: f64) {
    for c in photo.samples_mut().iter_mut() {
        *c = interpolate(0.0, *c, factor);
    }
}

/// Multiply one channel by `factor`, truncating and clipping to 255
pub fn scale_channel(photo: &mut Photo, channel: Channel, factor: f64) {
    if factor == 1.0 {
        return;
    }
    let offset = channel.offset();
    for px in photo.samples_mut().chunks_exact_mut(3) {
        px[offset] = (px[offset] as f64 * factor).clamp(0.0, 255.0) as u8;
    }
}

/// Linear interpolation `(1 - weight) * a + weight * b`
///
/// Returns `None` when the photos differ in size.
pub fn blend(a: &Photo, b: &Photo, weight: f32) -> Option<Photo> {
    let weight = weight as f64;
    if a.dimensions() != b.dimensions() {
        return None;
    }

    let data = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| clip((1.0 - weight) * x as f64 + weight * y as f64))
        .collect();
    Photo::from_rgb_bytes(a.width(), a.height(), data)
}

/// Copy `src` into `dst` with its top-left corner at `(x, y)`, clipping at the edges
pub fn paste(dst: &mut Photo, src: &Photo, x: u32, y: u32) {
    image::imageops::replace(dst.as_image_mut(), src.as_image(), x as i64, y as i64);
}

/// Composite a 1px outline just outside `inner` over the photo
///
/// Edges that would fall off the canvas are skipped, so pixels inside
/// `inner` are never touched.
pub fn draw_outline(photo: &mut Photo, inner: Rect, color: Rgba<u8>) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (width, height) = photo.dimensions();
    let left = inner.x.checked_sub(1);
    let top = inner.y.checked_sub(1);
    let right = Some(inner.x + inner.width).filter(|&x| x < width);
    let bottom = Some(inner.y + inner.height).filter(|&y| y < height);

    let x_start = left.unwrap_or(inner.x);
    let x_end = right.unwrap_or(inner.x + inner.width - 1);

    let mut composite = |x: u32, y: u32| {
        let [r, g, b] = photo.get_pixel(x, y);
        let mut base = Rgba([r, g, b, 255]);
        base.blend(&color);
        photo.set_pixel(x, y, base.to_rgb().0);
    };

    for row in [top, bottom].into_iter().flatten() {
        for x in x_start..=x_end {
            composite(x, row);
        }
    }
    for column in [left, right].into_iter().flatten() {
        for y in inner.y..inner.y + inner.height {
            composite(column, y);
        }
    }
}
