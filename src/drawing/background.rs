//! Background removal for uploaded images
//!
//! If the four corners share a color, that color is treated as background
//! and the image is binarized: background to white, everything else black.
//! Photographs without a uniform border are left untouched.

use image::{Rgba, RgbaImage};
use log::debug;

use crate::utils::rgb_within;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Corner pixels: top-left, top-right, bottom-left, bottom-right
fn corners(image: &RgbaImage) -> [[u8; 4]; 4] {
    let (w, h) = image.dimensions();
    [
        image.get_pixel(0, 0).0,
        image.get_pixel(w - 1, 0).0,
        image.get_pixel(0, h - 1).0,
        image.get_pixel(w - 1, h - 1).0,
    ]
}

/// Detect a uniform background color from the corners.
///
/// Each corner is compared against the first one (RGB only).
pub fn detect_background(image: &RgbaImage, tolerance: u8) -> Option<[u8; 4]> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }
    let samples = corners(image);
    let reference = samples[0];
    samples
        .iter()
        .all(|c| rgb_within(*c, reference, tolerance))
        .then_some(reference)
}

/// Binarize against a detected background. Returns whether anything changed.
pub fn remove_background(image: &mut RgbaImage, tolerance: u8) -> bool {
    let Some(reference) = detect_background(image, tolerance) else {
        debug!("background: corners differ, leaving image unmodified");
        return false;
    };

    debug!(
        "background: reference rgb({}, {}, {})",
        reference[0], reference[1], reference[2]
    );
    for pixel in image.pixels_mut() {
        *pixel = if rgb_within(pixel.0, reference, tolerance) {
            WHITE
        } else {
            BLACK
        };
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(8, 8, Rgba(color))
    }

    #[test]
    fn test_uniform_corners_binarize() {
        let mut img = uniform([250, 250, 250, 255]);
        img.put_pixel(3, 3, Rgba([10, 20, 200, 255]));
        img.put_pixel(4, 4, Rgba([235, 240, 245, 128]));

        assert!(remove_background(&mut img, 30));
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 255]);
        // Within tolerance on RGB; alpha is ignored
        assert_eq!(img.get_pixel(4, 4).0, [255, 255, 255, 255]);
        assert!(img
            .pixels()
            .all(|p| p.0 == [255, 255, 255, 255] || p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_tolerance_is_exclusive() {
        let mut img = uniform([250, 250, 250, 255]);
        img.put_pixel(4, 4, Rgba([220, 250, 250, 255]));
        assert!(remove_background(&mut img, 30));
        assert_eq!(img.get_pixel(4, 4).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_mixed_corners_unmodified() {
        let mut img = uniform([250, 250, 250, 255]);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(7, 7, Rgba([0, 0, 255, 255]));
        let before = img.clone();

        assert!(!remove_background(&mut img, 30));
        assert_eq!(img, before);
    }
}
