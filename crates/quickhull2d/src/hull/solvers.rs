//! Sequential QuickHull: pivot selection, two-sided split, recursion.
//!
//! - `quick_hull`: top-level entry point over a caller-owned collection.
//! - `find_hull`: one recursive step (farthest point, two sub-partitions).
//!
//! Code cross-refs: `util::{partition_left, farthest_from}`, `types::Baseline`.

use log::{debug, trace};
use nalgebra::Vector2;

use super::types::{Baseline, HullError, Point};
use super::util::{farthest_from, partition_left};
use crate::observer::HullObserver;

/// Compute the convex hull of `points`, setting each member's hull flag and
/// reporting progress to `obs`. Returns the number of hull vertices (>= 2).
///
/// Collinear interior points end up in neither top-level partition and keep
/// their flag false; two distinct points are a valid degenerate hull (a
/// segment). Fails fast on fewer than two points or a fully coincident
/// collection.
pub fn quick_hull<O: HullObserver>(points: &[Point], obs: &O) -> Result<usize, HullError> {
    if points.len() < 2 {
        return Err(HullError::NeedPoints { got: points.len() });
    }
    debug!("quick hull over {} points (serial)", points.len());
    obs.set_points(points);

    let (p, q) = select_pivots(points)?;
    p.mark_hull();
    obs.mark_hull(p);
    q.mark_hull();
    obs.mark_hull(q);
    obs.add_edge(p, q);

    let refs: Vec<&Point> = points.iter().collect();
    let s1 = partition_left(Baseline::new(p, q), &refs);
    let s2 = partition_left(Baseline::new(q, p), &refs);

    let mut count = 2;
    count += find_hull(&s1, Baseline::new(p, q), obs)?;
    count += find_hull(&s2, Baseline::new(q, p), obs)?;
    debug!("hull has {count} vertices");
    Ok(count)
}

/// Extreme points by lexicographic (x, then y) order. The y tie-break makes
/// vertically collinear inputs resolve to their two geometric extremes; any
/// point achieving the x extremum is a valid pivot.
pub(crate) fn select_pivots(points: &[Point]) -> Result<(&Point, &Point), HullError> {
    debug_assert!(points.len() >= 2, "caller checks the point-count precondition");
    let mut min = &points[0];
    let mut max = &points[0];
    for pt in &points[1..] {
        if lex_less(pt.pos, min.pos) {
            min = pt;
        }
        if lex_less(max.pos, pt.pos) {
            max = pt;
        }
    }
    if min.pos == max.pos {
        return Err(HullError::DegenerateBaseline);
    }
    Ok((min, max))
}

#[inline]
fn lex_less(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// One recursive QuickHull step on a partition strictly left of `line`.
/// Empty partitions are the terminal case. Returns the number of hull
/// vertices discovered in this subtree.
pub(crate) fn find_hull<O: HullObserver>(
    partition: &[&Point],
    line: Baseline<'_>,
    obs: &O,
) -> Result<usize, HullError> {
    if partition.is_empty() {
        return Ok(0);
    }
    let far = farthest_from(line, partition).ok_or(HullError::NoFarthest {
        partition: partition.len(),
    })?;
    let f = partition[far];
    trace!("farthest {} of {} candidates", f.id, partition.len());
    f.mark_hull();
    obs.mark_hull(f);
    obs.add_edge(line.p, f);
    obs.add_edge(f, line.q);
    obs.remove_edge(line.p, line.q);

    let s1 = partition_left(Baseline::new(line.p, f), partition);
    let s2 = partition_left(Baseline::new(f, line.q), partition);
    let left = find_hull(&s1, Baseline::new(line.p, f), obs)?;
    let right = find_hull(&s2, Baseline::new(f, line.q), obs)?;
    Ok(1 + left + right)
}
