//! Color helpers for export and drawing
//!
//! Colors travel as `[u8; 4]` RGBA pixels so they drop straight into
//! `image::Rgba`.

/// Parse a `#rrggbb` or `#rgb` color. The leading `#` is optional.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();

    match digits.len() {
        6 => {
            let channel = |i: usize| Some(nibble(i)? << 4 | nibble(i + 1)?);
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        // #abc is #aabbcc
        3 => Some((nibble(0)? * 0x11, nibble(1)? * 0x11, nibble(2)? * 0x11)),
        _ => None,
    }
}

/// Opaque pixel for `hex`, or `fallback` when it does not parse
pub fn hex_to_rgba(hex: &str, fallback: [u8; 4]) -> [u8; 4] {
    parse_hex_color(hex).map_or(fallback, |(r, g, b)| [r, g, b, 255])
}

/// Whether two pixels are within `tolerance` on each of R, G and B.
///
/// Alpha is ignored. The comparison is strict (`< tolerance`).
#[inline]
pub fn rgb_within(a: [u8; 4], b: [u8; 4], tolerance: u8) -> bool {
    a.iter()
        .zip(b.iter())
        .take(3)
        .all(|(x, y)| x.abs_diff(*y) < tolerance)
}

/// Blend a coverage value of `color` over `base` (straight alpha, opaque base).
#[inline]
pub fn blend_over(base: [u8; 4], color: [u8; 4], coverage: f32) -> [u8; 4] {
    let a = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, c: u8| -> u8 { (c as f32 * a + b as f32 * (1.0 - a)).round() as u8 };
    [
        mix(base[0], color[0]),
        mix(base[1], color[1]),
        mix(base[2], color[2]),
        base[3].max((a * 255.0).round() as u8),
    ]
}
