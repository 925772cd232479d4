//! CMYK ink channels and the four-plane image they live in.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::{Error, Result};

/// One of the four process ink channels, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl Channel {
    /// All channels in processing (and output) order.
    pub const ALL: [Channel; 4] = [
        Channel::Cyan,
        Channel::Magenta,
        Channel::Yellow,
        Channel::Black,
    ];

    /// Zero-based position in the processing order.
    pub fn index(self) -> usize {
        match self {
            Channel::Cyan => 0,
            Channel::Magenta => 1,
            Channel::Yellow => 2,
            Channel::Black => 3,
        }
    }

    /// Channel name, also used for output file names (`Cyan.png` etc).
    pub fn name(self) -> &'static str {
        match self {
            Channel::Cyan => "Cyan",
            Channel::Magenta => "Magenta",
            Channel::Yellow => "Yellow",
            Channel::Black => "Black",
        }
    }

    /// Screen angle in degrees: 15° apart per channel so overlaid dot
    /// grids do not produce moiré. Derived from the index so the value
    /// does not depend on iteration order.
    pub fn screen_angle(self) -> f32 {
        (self.index() * 15) as f32
    }
}

/// A four-plane CMYK image: one grayscale intensity plane per ink.
///
/// All planes share the same dimensions; every constructor enforces
/// this, so accessors never need to re-check.
#[derive(Debug, Clone)]
pub struct CmykImage {
    planes: [GrayImage; 4],
}

impl CmykImage {
    /// Convert an RGB image with the standard complement mapping:
    /// `C = 255−R`, `M = 255−G`, `Y = 255−B`, `K = 0`.
    pub fn from_rgb(rgb: &RgbImage) -> Result<Self> {
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }

        let mut planes = [
            GrayImage::new(width, height),
            GrayImage::new(width, height),
            GrayImage::new(width, height),
            GrayImage::new(width, height),
        ];

        for (x, y, pixel) in rgb.enumerate_pixels() {
            let Rgb([r, g, b]) = *pixel;
            planes[0].put_pixel(x, y, Luma([255 - r]));
            planes[1].put_pixel(x, y, Luma([255 - g]));
            planes[2].put_pixel(x, y, Luma([255 - b]));
            // K plane stays 0; GCR is responsible for black extraction.
        }

        Ok(CmykImage { planes })
    }

    /// Assemble from four existing planes in C, M, Y, K order.
    pub fn from_planes(planes: [GrayImage; 4]) -> Result<Self> {
        let expected = planes[0].dimensions();
        if expected.0 == 0 || expected.1 == 0 {
            return Err(Error::EmptyImage);
        }
        for plane in &planes[1..] {
            if plane.dimensions() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: plane.dimensions(),
                });
            }
        }
        Ok(CmykImage { planes })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.planes[0].dimensions()
    }

    pub fn width(&self) -> u32 {
        self.planes[0].width()
    }

    pub fn height(&self) -> u32 {
        self.planes[0].height()
    }

    /// The intensity plane for one ink channel.
    pub fn plane(&self, channel: Channel) -> &GrayImage {
        &self.planes[channel.index()]
    }

    /// All four planes in C, M, Y, K order.
    pub fn planes(&self) -> &[GrayImage; 4] {
        &self.planes
    }

    /// Consume the image, yielding the planes in C, M, Y, K order.
    pub fn into_planes(self) -> [GrayImage; 4] {
        self.planes
    }

    /// Approximate RGB preview: `R = max(0, 255−C−K)` and likewise for
    /// G/B. The saturating inverse of [`CmykImage::from_rgb`]; not
    /// colorimetrically accurate.
    pub fn to_rgb(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        let mut rgb = RgbImage::new(width, height);

        for (x, y, pixel) in rgb.enumerate_pixels_mut() {
            let k = self.planes[3].get_pixel(x, y).0[0];
            let r = (255 - self.planes[0].get_pixel(x, y).0[0]).saturating_sub(k);
            let g = (255 - self.planes[1].get_pixel(x, y).0[0]).saturating_sub(k);
            let b = (255 - self.planes[2].get_pixel(x, y).0[0]).saturating_sub(k);
            *pixel = Rgb([r, g, b]);
        }

        rgb
    }
}
