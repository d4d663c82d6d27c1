use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

/// Represents a single photo being styled
///
/// This is a simple wrapper around an RGB image buffer that provides
/// the pixel access used by the color and frame recipes. Every photo is
/// three-channel; alpha is flattened away when the photo is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    buffer: RgbImage,
}

impl Photo {
    /// Create a new photo from an RGB image buffer
    pub fn new(buffer: RgbImage) -> Self {
        Self { buffer }
    }

    /// Create a new photo with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgb(color));
        Self { buffer }
    }

    /// Convert any decoded image into a three-channel photo
    ///
    /// Transparent pixels are composited over white, the same background
    /// the frame recipes use.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        if !image.color().has_alpha() {
            return Self::new(image.to_rgb8());
        }

        let rgba = image.to_rgba8();
        let buffer = ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            let alpha = a as f32 / 255.0;
            let flatten = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
            Rgb([flatten(r), flatten(g), flatten(b)])
        });
        Self::new(buffer)
    }

    /// Get the width of the photo
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Get the height of the photo
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.buffer.get_pixel(x, y).0
    }

    /// Set a pixel at the given coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        self.buffer.put_pixel(x, y, Rgb(color));
    }

    /// Get the underlying image buffer
    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Get a mutable reference to the underlying image buffer
    pub fn as_image_mut(&mut self) -> &mut RgbImage {
        &mut self.buffer
    }

    /// Consume the photo, returning the underlying image buffer
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }

    /// Interleaved RGB samples, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Mutable interleaved RGB samples, row-major
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Create a photo from raw RGB bytes
    pub fn from_rgb_bytes(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        ImageBuffer::from_raw(width, height, data)
            .map(|buffer| Self { buffer })
    }
}

impl From<RgbImage> for Photo {
    fn from(buffer: RgbImage) -> Self {
        Self::new(buffer)
    }
}
