//! End-to-end pipeline scenarios: separate -> halftone -> templates.

use halftone::{
    Channel, DEFAULT_THRESHOLD, halftone, render::render_plane, screen_templates, separate,
};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

fn solid(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
}

#[test]
fn white_image_produces_fully_transparent_screens() {
    let image = solid(1, 1, Rgb([255, 255, 255]));

    let cmyk = separate(&image, 0).unwrap();
    for channel in Channel::ALL {
        assert_eq!(cmyk.plane(channel).get_pixel(0, 0).0[0], 0);
    }

    let dots = halftone(&cmyk, 1, 1).unwrap();
    for (plane, channel) in dots.iter().zip(Channel::ALL) {
        assert_eq!(plane.dimensions(), (1, 1));
        assert!(
            plane.pixels().all(|p| p.0[0] == 0),
            "unexpected ink in {}",
            channel.name()
        );
    }

    let screens = screen_templates(&dots, DEFAULT_THRESHOLD).unwrap();
    for (screen, channel) in screens.iter().zip(Channel::ALL) {
        // Blank plane inverts to 255, above the threshold: transparent,
        // with the inverted value kept as intensity.
        assert!(
            screen.pixels().all(|p| p.0 == [255, 0]),
            "opaque pixel in {}",
            channel.name()
        );
    }
}

#[test]
fn black_image_with_full_gcr_puts_all_ink_in_the_key_channel() {
    let image = solid(2, 2, Rgb([0, 0, 0]));

    let cmyk = separate(&image, 100).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(cmyk.plane(Channel::Cyan).get_pixel(x, y).0[0], 0);
            assert_eq!(cmyk.plane(Channel::Magenta).get_pixel(x, y).0[0], 0);
            assert_eq!(cmyk.plane(Channel::Yellow).get_pixel(x, y).0[0], 0);
            assert_eq!(cmyk.plane(Channel::Black).get_pixel(x, y).0[0], 255);
        }
    }

    let dots = halftone(&cmyk, 1, 1).unwrap();
    let screens = screen_templates(&dots, DEFAULT_THRESHOLD).unwrap();

    // C, M, Y carry no ink anywhere, so their screens are fully
    // transparent.
    for channel in [Channel::Cyan, Channel::Magenta, Channel::Yellow] {
        assert!(dots[channel.index()].pixels().all(|p| p.0[0] == 0));
        assert!(
            screens[channel.index()].pixels().all(|p| p.0 == [255, 0]),
            "opaque pixel in {}",
            channel.name()
        );
    }

    // The key plane means 255 in every sample box, so every pixel is
    // inked and its screen is opaque everywhere.
    let key_dots = &dots[Channel::Black.index()];
    assert_eq!(key_dots.dimensions(), (2, 2));
    assert!(key_dots.pixels().all(|p| p.0[0] == 255));

    let key_screen = &screens[Channel::Black.index()];
    assert_eq!(key_screen.dimensions(), (2, 2));
    for (x, y, pixel) in key_screen.enumerate_pixels() {
        assert_eq!(pixel.0, [0, 255], "key screen not opaque at ({x}, {y})");
    }
}

#[test]
fn full_intensity_plane_yields_fully_opaque_screen() {
    // The key plane of a solid black separation, rendered without a
    // screen angle: every 1x1 box means 255, so every pixel is inked
    // and the resulting template is opaque everywhere.
    let plane = GrayImage::from_pixel(2, 2, Luma([255]));
    let dots = render_plane(&plane, 0.0, 1, 1);
    assert!(dots.pixels().all(|p| p.0[0] == 255));

    let screens = screen_templates(
        &[dots.clone(), dots.clone(), dots.clone(), dots],
        DEFAULT_THRESHOLD,
    )
    .unwrap();
    assert!(screens[0].pixels().all(|p| p.0 == [0, 255]));
}

#[test]
fn pipeline_preserves_scaled_dimensions_for_every_channel() {
    let mut rgb = RgbImage::new(7, 5);
    for (x, y, pixel) in rgb.enumerate_pixels_mut() {
        let v = ((x * 40 + y * 17) % 256) as u8;
        *pixel = Rgb([v, 255 - v, v / 2]);
    }
    let image = DynamicImage::ImageRgb8(rgb);

    let cmyk = separate(&image, 30).unwrap();
    let dots = halftone(&cmyk, 2, 3).unwrap();
    for plane in &dots {
        assert_eq!(plane.dimensions(), (21, 15));
    }

    let screens = screen_templates(&dots, DEFAULT_THRESHOLD).unwrap();
    for screen in &screens {
        assert_eq!(screen.dimensions(), (21, 15));
    }
}

#[test]
fn invalid_parameters_fail_before_any_processing() {
    let image = solid(2, 2, Rgb([10, 20, 30]));

    assert!(separate(&image, 101).is_err());

    let cmyk = separate(&image, 30).unwrap();
    assert!(halftone(&cmyk, 0, 1).is_err());
    assert!(halftone(&cmyk, 1, 0).is_err());
}
