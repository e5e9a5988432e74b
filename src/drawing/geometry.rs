//! Geometric primitives for anti-aliased stroke rendering
//!
//! Freehand strokes are rasterized as capsules (segment + radius), which
//! yields round caps and round joins without special casing.

type Point = (f32, f32);

#[inline]
fn hypot(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Hermite ease (3t² - 2t³), expects t in 0..=1
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Alpha for a pixel `inside` units within an edge.
///
/// Non-negative means fully covered. Negative values fade out over
/// `feather` units and reach zero beyond it.
#[inline]
pub fn edge_alpha(inside: f32, feather: f32) -> f32 {
    if inside >= 0.0 {
        return 1.0;
    }
    smoothstep((1.0 + inside / feather).clamp(0.0, 1.0))
}

/// Shortest distance from `p` to the segment a-b.
/// A zero-length segment degrades to point distance.
#[inline]
pub fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (ab_x, ab_y) = (b.0 - a.0, b.1 - a.1);
    let len_sq = ab_x * ab_x + ab_y * ab_y;
    if len_sq == 0.0 {
        return hypot(p.0 - a.0, p.1 - a.1);
    }

    // Projection of p onto the segment, clamped to its ends
    let t = (((p.0 - a.0) * ab_x + (p.1 - a.1) * ab_y) / len_sq).clamp(0.0, 1.0);
    hypot(p.0 - (a.0 + t * ab_x), p.1 - (a.1 + t * ab_y))
}

/// Coverage of a pixel center by a capsule of `radius` around segment a-b
#[inline]
pub fn capsule_coverage(p: Point, a: Point, b: Point, radius: f32, feather: f32) -> f32 {
    edge_alpha(radius - segment_distance(p, a, b), feather)
}

/// Pixel bounding box of a capsule, clamped to `size` x `size`.
/// Returns None when the capsule lies entirely outside.
pub fn capsule_bounds(a: Point, b: Point, reach: f32, size: u32) -> Option<(u32, u32, u32, u32)> {
    let limit = size as f32 - 1.0;
    let lo = |u: f32, v: f32| (u.min(v) - reach).floor();
    let hi = |u: f32, v: f32| (u.max(v) + reach).ceil();
    let (x0, y0) = (lo(a.0, b.0), lo(a.1, b.1));
    let (x1, y1) = (hi(a.0, b.0), hi(a.1, b.1));

    if x1 < 0.0 || y1 < 0.0 || x0 > limit || y0 > limit {
        return None;
    }
    let clamp = |v: f32| v.clamp(0.0, limit) as u32;
    Some((clamp(x0), clamp(y0), clamp(x1), clamp(y1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_ends() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_edge_alpha() {
        assert_eq!(edge_alpha(2.0, 1.0), 1.0);
        assert_eq!(edge_alpha(0.0, 1.0), 1.0);
        assert_eq!(edge_alpha(-3.0, 1.0), 0.0);
        let mid = edge_alpha(-0.5, 1.0);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_segment_distance() {
        let (a, b) = ((-1.0, 0.0), (1.0, 0.0));
        assert!((segment_distance((0.0, 1.0), a, b) - 1.0).abs() < 0.001);
        // Past the end cap
        assert!((segment_distance((3.0, 0.0), a, b) - 2.0).abs() < 0.001);
        assert!((segment_distance((0.0, 2.0), (0.0, 0.0), (0.0, 0.0)) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_capsule_coverage() {
        let (a, b) = ((10.0, 10.0), (20.0, 10.0));
        assert_eq!(capsule_coverage((15.0, 11.0), a, b, 3.0, 1.0), 1.0);
        assert_eq!(capsule_coverage((15.0, 20.0), a, b, 3.0, 1.0), 0.0);
    }

    #[test]
    fn test_capsule_bounds_clamps() {
        assert_eq!(
            capsule_bounds((1.0, 1.0), (10.0, 2.0), 3.0, 400),
            Some((0, 0, 13, 5))
        );
        assert_eq!(capsule_bounds((-50.0, -50.0), (-40.0, -40.0), 3.0, 400), None);
    }
}
