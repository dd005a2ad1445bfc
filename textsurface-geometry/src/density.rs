//! Point-density normalization.
//!
//! Resamples a point sequence so that the spacing between successive points
//! falls within a target band `[min_dist, max_dist]`:
//!
//! - segments shorter than `min_dist` are dropped entirely, compacting runs
//!   of near-coincident points;
//! - segments within the band pass through unchanged;
//! - segments longer than `max_dist` are split by recursive midpoint
//!   bisection, bounded to one expanded bisection level.
//!
//! The bounded recursion is a quality/performance tradeoff: a segment longer
//! than `2 * max_dist` keeps one over-long gap per capped branch instead of
//! being subdivided to convergence. For glyph outlines fed through an SVG
//! path flattener the segments are short enough that the cap is rarely hit,
//! and the aggregate output is evenly spaced enough to drive a
//! particle-style renderer without the clusters and gaps a plain polygon
//! walk produces at sharp corners.

use kurbo::Point;

use crate::types::Scalar;

/// Bisection levels expanded beyond the initial split. Deeper imbalance is
/// accepted rather than subdivided further.
const MAX_BISECT_DEPTH: u32 = 1;

/// Resample `points` so successive output spacing falls within
/// `[min_dist, max_dist]` where possible.
///
/// The first point is emitted as-is with no distance check. Each following
/// point is measured against the last point actually emitted — a point that
/// produced no output does not advance the reference, so consecutive
/// too-close points are all dropped against the same anchor.
///
/// Fewer than two input points produce no output (there is no segment to
/// sample). The sequence is treated as open: no wrap-around segment from the
/// last point back to the first is ever considered.
#[must_use]
pub fn normalize(points: &[Point], min_dist: Scalar, max_dist: Scalar) -> Vec<Point> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    let mut last = points[0];

    for &vertex in &points[1..] {
        let emitted = resample_segment(last, vertex, min_dist, max_dist);
        if let Some(&tail) = emitted.last() {
            last = tail;
        }
        out.extend(emitted);
    }

    out
}

/// Sample points for the half-open segment `(last, vertex]`.
///
/// Returns the points to emit in order: nothing if the segment is dropped
/// as too short, otherwise the interior subdivision points followed by
/// `vertex`. Once a segment is over-long its midpoint and endpoint are
/// emitted unconditionally — only the points between them are subject to
/// further measurement.
fn resample_segment(last: Point, vertex: Point, min_dist: Scalar, max_dist: Scalar) -> Vec<Point> {
    let dist = last.distance(vertex);
    if dist < min_dist {
        return Vec::new();
    }
    if dist <= max_dist {
        return vec![vertex];
    }

    let mid = last.midpoint(vertex);
    let mut out = interior_points(last, mid, max_dist, 1);
    out.push(mid);
    out.extend(interior_points(mid, vertex, max_dist, 1));
    out.push(vertex);
    out
}

/// Subdivision points strictly between `a` and `b`, bisecting while the
/// span exceeds `max_dist` and the depth cap allows.
fn interior_points(a: Point, b: Point, max_dist: Scalar, depth: u32) -> Vec<Point> {
    if depth > MAX_BISECT_DEPTH || a.distance(b) <= max_dist {
        return Vec::new();
    }

    let mid = a.midpoint(b);
    let mut out = interior_points(a, mid, max_dist, depth + 1);
    out.push(mid);
    out.extend(interior_points(mid, b, max_dist, depth + 1));
    out
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    const MIN: Scalar = 5.0;
    const MAX: Scalar = 10.0;

    fn pt(x: Scalar, y: Scalar) -> Point {
        Point::new(x, y)
    }

    fn spacings(points: &[Point]) -> Vec<Scalar> {
        points.windows(2).map(|w| w[0].distance(w[1])).collect()
    }

    #[test]
    fn empty_and_single_point_produce_nothing() {
        assert!(normalize(&[], MIN, MAX).is_empty());
        assert!(normalize(&[pt(3.0, 4.0)], MIN, MAX).is_empty());
    }

    #[test]
    fn in_range_segments_pass_through_unchanged() {
        let input = [pt(0.0, 0.0), pt(6.0, 0.0), pt(12.0, 0.0)];
        assert_eq!(normalize(&input, MIN, MAX), input.to_vec());
    }

    #[test]
    fn long_segment_bisects_to_quarters() {
        // 30 units splits once, then each half splits again; the depth cap
        // stops further measurement, leaving quarter points.
        let out = normalize(&[pt(0.0, 0.0), pt(0.0, 30.0)], MIN, MAX);
        let expected = [
            pt(0.0, 0.0),
            pt(0.0, 7.5),
            pt(0.0, 15.0),
            pt(0.0, 22.5),
            pt(0.0, 30.0),
        ];
        assert_eq!(out.len(), expected.len());
        for (got, want) in out.iter().zip(expected.iter()) {
            assert!((got.x - want.x).abs() < EPSILON, "{got:?} != {want:?}");
            assert!((got.y - want.y).abs() < EPSILON, "{got:?} != {want:?}");
        }
    }

    #[test]
    fn segment_within_twice_max_never_exceeds_max() {
        // A 20-unit segment halves to two in-band 10-unit segments.
        let out = normalize(&[pt(0.0, 0.0), pt(0.0, 20.0)], MIN, MAX);
        for gap in spacings(&out) {
            assert!(gap <= MAX + EPSILON, "gap {gap} exceeds max");
        }
    }

    #[test]
    fn depth_cap_leaves_one_overlong_gap_per_branch() {
        // 60 units: one split to 30, one more to 15, then the cap emits the
        // 15-unit sub-segment endpoints unmeasured. Observed overflow is
        // exactly length / 4.
        let out = normalize(&[pt(0.0, 0.0), pt(0.0, 60.0)], MIN, MAX);
        let gaps = spacings(&out);
        assert!(gaps.iter().all(|g| (g - 15.0).abs() < EPSILON));
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn tight_band_keeps_midpoint_and_endpoint_of_overlong_segment() {
        // With min_dist > max_dist / 2 the halves of a just-over-long
        // segment fall below min_dist. The midpoint and endpoint are
        // emitted regardless; only interior subdivision is skipped.
        let out = normalize(&[pt(0.0, 0.0), pt(0.0, 11.0)], 6.0, MAX);
        assert_eq!(out, vec![pt(0.0, 0.0), pt(0.0, 5.5), pt(0.0, 11.0)]);
    }

    #[test]
    fn too_close_points_are_dropped_without_advancing_anchor() {
        // 2 and 4 are both closer than MIN to the last *emitted* point
        // (0, not each other), so both vanish; 6 is measured against 0.
        let input = [pt(0.0, 0.0), pt(2.0, 0.0), pt(4.0, 0.0), pt(6.0, 0.0)];
        let out = normalize(&input, MIN, MAX);
        assert_eq!(out, vec![pt(0.0, 0.0), pt(6.0, 0.0)]);
    }

    #[test]
    fn dropped_tail_leaves_only_seed() {
        let out = normalize(&[pt(0.0, 0.0), pt(1.0, 0.0)], MIN, MAX);
        assert_eq!(out, vec![pt(0.0, 0.0)]);
    }

    #[test]
    fn no_wraparound_for_ring_shaped_input() {
        // Triangle with all edges in band: identity, and nothing emitted for
        // the implicit closing edge.
        let input = [pt(0.0, 0.0), pt(6.0, 0.0), pt(3.0, 5.0)];
        let out = normalize(&input, MIN, MAX);
        assert_eq!(out, input.to_vec());
    }

    #[test]
    fn spacing_tends_toward_band_center() {
        // A straight run of long segments lands near (MIN + MAX) / 2 once
        // bisected.
        let input = [pt(0.0, 0.0), pt(0.0, 15.0), pt(0.0, 30.0)];
        let out = normalize(&input, MIN, MAX);
        let gaps = spacings(&out);
        assert!(!gaps.is_empty());
        for gap in gaps {
            assert!((gap - 7.5).abs() < EPSILON);
        }
    }
}
