//! Writing screens to disk and merging dot planes for preview.

use std::path::Path;

use image::{GrayAlphaImage, GrayImage, RgbImage};
use tracing::info;

use crate::cmyk::{Channel, CmykImage};
use crate::Result;

/// Write the four screen templates as PNG files named after their ink
/// channel (`Cyan.png`, `Magenta.png`, `Yellow.png`, `Black.png`) into
/// `dir`. The directory must already exist.
pub fn save_screens(dir: &Path, screens: &[GrayAlphaImage; 4]) -> Result<()> {
    for channel in Channel::ALL {
        let path = dir.join(format!("{}.png", channel.name()));
        screens[channel.index()].save(&path)?;
        info!(path = %path.display(), "Wrote screen template");
    }
    Ok(())
}

/// Merge four halftone dot planes back into one RGB preview image, the
/// equivalent of recombining the separation as a single CMYK picture.
/// Rejects planes of differing dimensions.
pub fn composite(dots: &[GrayImage; 4]) -> Result<RgbImage> {
    let cmyk = CmykImage::from_planes([
        dots[0].clone(),
        dots[1].clone(),
        dots[2].clone(),
        dots[3].clone(),
    ])?;
    Ok(cmyk.to_rgb())
}
