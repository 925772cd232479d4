//! Gray component replacement (GCR) color separation.
//!
//! Shifts the gray component shared by the C/M/Y inks into the K
//! channel, reducing total ink coverage. With percentage 100, a pixel
//! like (41, 100, 255, 0) separates to (0, 59, 214, 41).

use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::cmyk::CmykImage;
use crate::{Error, Result};

/// Separate a source image into CMYK planes with `percentage` of the
/// gray component moved from C/M/Y into K.
pub fn separate(image: &DynamicImage, percentage: u8) -> Result<CmykImage> {
    let cmyk = CmykImage::from_rgb(&image.to_rgb8())?;
    gray_component_replacement(&cmyk, percentage)
}

/// Apply gray component replacement to an existing CMYK image.
///
/// For every pixel, `gray = min(C, M, Y) * percentage / 100` (integer
/// floor) is subtracted from each of C/M/Y and becomes the K value.
/// `percentage == 0` returns the input unchanged. Since
/// `gray <= min(C, M, Y)` for any percentage up to 100, the subtraction
/// never underflows; percentages above 100 are rejected.
pub fn gray_component_replacement(cmyk: &CmykImage, percentage: u8) -> Result<CmykImage> {
    if percentage > 100 {
        return Err(Error::PercentageOutOfRange(percentage));
    }

    let (width, height) = cmyk.dimensions();
    debug!(width, height, percentage, "Applying gray component replacement");

    if percentage == 0 {
        return Ok(cmyk.clone());
    }

    let [src_c, src_m, src_y, _] = cmyk.planes();
    let mut out: [GrayImage; 4] = std::array::from_fn(|_| GrayImage::new(width, height));

    for y in 0..height {
        for x in 0..width {
            let c = src_c.get_pixel(x, y).0[0];
            let m = src_m.get_pixel(x, y).0[0];
            let yel = src_y.get_pixel(x, y).0[0];
            let gray = (u32::from(c.min(m).min(yel)) * u32::from(percentage) / 100) as u8;

            out[0].put_pixel(x, y, Luma([c - gray]));
            out[1].put_pixel(x, y, Luma([m - gray]));
            out[2].put_pixel(x, y, Luma([yel - gray]));
            out[3].put_pixel(x, y, Luma([gray]));
        }
    }

    CmykImage::from_planes(out)
}
