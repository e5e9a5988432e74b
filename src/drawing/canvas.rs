//! Drawing canvas
//!
//! Fixed-size square RGBA bitmap holding freehand strokes (black on white)
//! or an uploaded image fitted to the canvas. Serializes to a PNG data URL
//! for the recognition service.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{debug, info};
use thiserror::Error;

use super::background::remove_background;
use super::geometry::{capsule_bounds, capsule_coverage};
use crate::constants::{BACKGROUND_TOLERANCE, CANVAS_SIZE, STROKE_AA_WIDTH, STROKE_WIDTH};
use crate::font::GlyphBitmap;
use crate::utils::blend_over;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const INK: [u8; 4] = [0, 0, 0, 255];

/// Canvas and image errors
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has no pixels")]
    EmptyImage,
    #[error("PNG encode failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// A freehand stroke: consecutive points joined by line segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    pub points: Vec<(f32, f32)>,
}

impl Stroke {
    /// Parse strokes from text.
    ///
    /// Strokes are separated by `;` or newlines; points are `x,y` pairs
    /// separated by whitespace. Malformed points are skipped.
    /// Example: "10,10 50,50; 50,10 10,50"
    pub fn parse_list(text: &str) -> Vec<Stroke> {
        text.split(|c| c == ';' || c == '\n')
            .map(|part| Stroke {
                points: part.split_whitespace().filter_map(parse_point).collect(),
            })
            .filter(|s| !s.points.is_empty())
            .collect()
    }
}

fn parse_point(token: &str) -> Option<(f32, f32)> {
    let (x, y) = token.split_once(',')?;
    let x: f32 = x.trim().parse().ok()?;
    let y: f32 = y.trim().parse().ok()?;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}

/// Square drawing surface
pub struct Canvas {
    image: RgbaImage,
    /// Last point of the stroke in progress
    pen: Option<(f32, f32)>,
    has_content: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// White canvas of the standard size
    pub fn new() -> Self {
        Self::with_size(CANVAS_SIZE)
    }

    pub fn with_size(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba(WHITE)),
            pen: None,
            has_content: false,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Whether anything has been drawn or loaded since the last clear
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Reset to white
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(WHITE);
        }
        self.pen = None;
        self.has_content = false;
    }

    /// Start a stroke (draws a round dot at the start point)
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        self.segment((x, y), (x, y));
        self.pen = Some((x, y));
        self.has_content = true;
    }

    /// Extend the current stroke; no-op when no stroke is in progress
    pub fn line_to(&mut self, x: f32, y: f32) {
        let Some(from) = self.pen else {
            return;
        };
        self.segment(from, (x, y));
        self.pen = Some((x, y));
    }

    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Draw complete strokes
    pub fn draw_strokes(&mut self, strokes: &[Stroke]) {
        for stroke in strokes {
            let mut points = stroke.points.iter();
            if let Some(&(x, y)) = points.next() {
                self.begin_stroke(x, y);
                for &(x, y) in points {
                    self.line_to(x, y);
                }
                self.end_stroke();
            }
        }
        debug!("canvas: drew {} strokes", strokes.len());
    }

    /// Rasterize one capsule segment in ink
    fn segment(&mut self, a: (f32, f32), b: (f32, f32)) {
        let radius = STROKE_WIDTH / 2.0;
        let Some((x0, y0, x1, y1)) =
            capsule_bounds(a, b, radius + STROKE_AA_WIDTH, self.image.width())
        else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = (x as f32 + 0.5, y as f32 + 0.5);
                let coverage = capsule_coverage(center, a, b, radius, STROKE_AA_WIDTH);
                if coverage > 0.0 {
                    let pixel = self.image.get_pixel_mut(x, y);
                    pixel.0 = blend_over(pixel.0, INK, coverage);
                }
            }
        }
    }

    /// Replace the canvas with an uploaded image.
    ///
    /// The image is scaled uniformly to fit, centered on white, then
    /// binarized if a uniform background is detected. On decode failure the
    /// canvas is left unchanged.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), CanvasError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (w, h) = decoded.dimensions();
        if w == 0 || h == 0 {
            return Err(CanvasError::EmptyImage);
        }

        let size = self.image.width();
        let scale = (size as f32 / w as f32).min(size as f32 / h as f32);
        let fit_w = ((w as f32 * scale).round() as u32).clamp(1, size);
        let fit_h = ((h as f32 * scale).round() as u32).clamp(1, size);
        let resized = imageops::resize(&decoded, fit_w, fit_h, FilterType::Lanczos3);

        self.clear();
        let x = (size - fit_w) / 2;
        let y = (size - fit_h) / 2;
        imageops::overlay(&mut self.image, &resized, x as i64, y as i64);

        let binarized = remove_background(&mut self.image, BACKGROUND_TOLERANCE);
        info!(
            "canvas: loaded {}x{} image at {}x{} (background removed: {})",
            w, h, fit_w, fit_h, binarized
        );
        self.has_content = true;
        Ok(())
    }

    /// Stamp a glyph coverage bitmap in ink, centered
    pub fn draw_glyph(&mut self, glyph: &GlyphBitmap) {
        let size = self.image.width() as i64;
        let ox = (size - glyph.width as i64) / 2;
        let oy = (size - glyph.height as i64) / 2;

        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let coverage = glyph.coverage[gy * glyph.width + gx];
                if coverage == 0 {
                    continue;
                }
                let (x, y) = (ox + gx as i64, oy + gy as i64);
                if x < 0 || y < 0 || x >= size || y >= size {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x as u32, y as u32);
                pixel.0 = blend_over(pixel.0, INK, coverage as f32 / 255.0);
            }
        }
        self.has_content = true;
    }

    /// Lossless PNG encoding of the canvas
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        encode_png(&self.image)
    }

    /// "data:image/png;base64,..."
    pub fn to_data_url(&self) -> Result<String, CanvasError> {
        let png = self.to_png()?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}

/// Encode an RGBA image as 8-bit PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CanvasError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new();
        assert_eq!(canvas.image().dimensions(), (400, 400));
        assert!(canvas.image().pixels().all(|p| p.0 == WHITE));
        assert!(!canvas.has_content());
    }

    #[test]
    fn test_stroke_inks_path_only() {
        let mut canvas = Canvas::new();
        canvas.begin_stroke(100.0, 200.0);
        canvas.line_to(300.0, 200.0);
        canvas.end_stroke();

        assert!(canvas.has_content());
        assert_eq!(canvas.image().get_pixel(200, 199).0, INK);
        assert_eq!(canvas.image().get_pixel(200, 150).0, WHITE);
        // Round cap extends half the width past the end point
        assert_eq!(canvas.image().get_pixel(301, 199).0, INK);
        assert_eq!(canvas.image().get_pixel(310, 199).0, WHITE);
    }

    #[test]
    fn test_line_without_stroke_is_noop() {
        let mut canvas = Canvas::new();
        canvas.line_to(10.0, 10.0);
        assert!(canvas.image().pixels().all(|p| p.0 == WHITE));
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new();
        canvas.draw_strokes(&Stroke::parse_list("10,10 50,50"));
        assert!(canvas.has_content());
        canvas.clear();
        assert!(!canvas.has_content());
        assert!(canvas.image().pixels().all(|p| p.0 == WHITE));
    }

    #[test]
    fn test_parse_strokes() {
        let strokes = Stroke::parse_list("10,10 50,50; 50,10 bad 10,50\n\n200,200");
        assert_eq!(strokes.len(), 3);
        assert_eq!(strokes[0].points, vec![(10.0, 10.0), (50.0, 50.0)]);
        assert_eq!(strokes[1].points, vec![(50.0, 10.0), (10.0, 50.0)]);
        assert_eq!(strokes[2].points, vec![(200.0, 200.0)]);
    }

    #[test]
    fn test_data_url_is_png() {
        let canvas = Canvas::with_size(16);
        let url = canvas.to_data_url().unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_load_image_fits_and_binarizes() {
        // 40x20 light-gray image with a dark block in the middle
        let mut src = RgbaImage::from_pixel(40, 20, Rgba([250, 250, 250, 255]));
        for y in 5..15 {
            for x in 15..25 {
                src.put_pixel(x, y, Rgba([30, 30, 30, 255]));
            }
        }
        let bytes = encode_png(&src).unwrap();

        let mut canvas = Canvas::new();
        canvas.load_image(&bytes).unwrap();
        assert!(canvas.has_content());
        assert_eq!(canvas.image().get_pixel(200, 200).0, INK);
        assert_eq!(canvas.image().get_pixel(20, 200).0, WHITE);
        // Letterbox area (white canvas) is background too
        assert_eq!(canvas.image().get_pixel(200, 10).0, WHITE);
    }

    #[test]
    fn test_load_image_decode_error_keeps_canvas() {
        let mut canvas = Canvas::new();
        canvas.begin_stroke(50.0, 50.0);
        let before = canvas.image().clone();
        assert!(canvas.load_image(b"not an image").is_err());
        assert_eq!(canvas.image(), &before);
    }

    #[test]
    fn test_draw_glyph_centered() {
        let glyph = GlyphBitmap {
            width: 4,
            height: 4,
            coverage: vec![255; 16],
        };
        let mut canvas = Canvas::with_size(8);
        canvas.draw_glyph(&glyph);
        assert_eq!(canvas.image().get_pixel(2, 2).0, INK);
        assert_eq!(canvas.image().get_pixel(5, 5).0, INK);
        assert_eq!(canvas.image().get_pixel(1, 1).0, WHITE);
    }
}
