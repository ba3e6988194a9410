//! Geometric primitives: orientation, line distance, partition, farthest.

use nalgebra::Vector2;

use super::types::{Baseline, Point};

/// 2-D cross product of PQ and PX. Positive iff X lies strictly left of the
/// directed line P→Q, negative iff strictly right, zero iff collinear.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, x: Vector2<f64>) -> f64 {
    let pq = q - p;
    let px = x - p;
    pq.x * px.y - pq.y * px.x
}

/// Perpendicular distance from X to the infinite line through P and Q,
/// i.e. `|cross(PQ, PX)| / |PQ|`. P and Q must be distinct.
#[inline]
pub fn distance_to_line(p: Vector2<f64>, q: Vector2<f64>, x: Vector2<f64>) -> f64 {
    let len = (q - p).norm();
    debug_assert!(len > 0.0, "baseline endpoints must be distinct");
    orientation(p, q, x).abs() / len
}

/// Keep the candidates strictly left of the baseline, excluding the baseline
/// endpoints themselves (by id). Pure filter, linear time.
///
/// Strictness is deliberate: a collinear candidate (cross exactly zero) is
/// not a hull vertex of this branch and admitting it would let degenerate
/// inputs flag interior points. See DESIGN.md on the boundary policy.
pub fn partition_left<'a>(line: Baseline<'_>, candidates: &[&'a Point]) -> Vec<&'a Point> {
    candidates
        .iter()
        .copied()
        .filter(|x| !line.is_endpoint(x) && orientation(line.p.pos, line.q.pos, x.pos) > 0.0)
        .collect()
}

/// Index of the partition point farthest from the baseline, or `None` when
/// the partition is empty. Ties go to the first maximum in iteration order;
/// the parallel variant keeps this scan sequential, so both variants agree.
pub fn farthest_from(line: Baseline<'_>, partition: &[&Point]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, x) in partition.iter().enumerate() {
        let d = distance_to_line(line.p.pos, line.q.pos, x.pos);
        match best {
            Some((_, dmax)) if d <= dmax => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
