//! Fork-join QuickHull: sibling recursions run as rayon tasks.
//!
//! The two sub-partitions produced by each step are disjoint (strict
//! partitioning from a common parent, endpoints excluded by id), so sibling
//! tasks share only read-only baseline points and never race on a hull
//! flag. `HullCfg` bounds fan-out on skewed recursion trees; below either
//! bound the step degrades to the sequential recursion.

use log::debug;

use super::solvers::{find_hull, select_pivots};
use super::types::{Baseline, HullCfg, HullError, Point};
use super::util::{farthest_from, partition_left};
use crate::observer::HullObserver;

/// Parallel counterpart of [`quick_hull`](super::quick_hull): identical hull
/// flags and vertex count, interleaved observer notifications across
/// concurrent sibling branches.
pub fn quick_hull_parallel<O: HullObserver>(
    points: &[Point],
    obs: &O,
    cfg: HullCfg,
) -> Result<usize, HullError> {
    if points.len() < 2 {
        return Err(HullError::NeedPoints { got: points.len() });
    }
    debug!("quick hull over {} points (parallel, {cfg:?})", points.len());
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

    let (left, right) = rayon::join(
        || find_hull_parallel(&s1, Baseline::new(p, q), obs, cfg, 0),
        || find_hull_parallel(&s2, Baseline::new(q, p), obs, cfg, 0),
    );
    let count = 2 + left? + right?;
    debug!("hull has {count} vertices");
    Ok(count)
}

fn find_hull_parallel<O: HullObserver>(
    partition: &[&Point],
    line: Baseline<'_>,
    obs: &O,
    cfg: HullCfg,
    depth: usize,
) -> Result<usize, HullError> {
    if partition.is_empty() {
        return Ok(0);
    }
    if partition.len() < cfg.spawn_cutoff || depth >= cfg.spawn_depth {
        return find_hull(partition, line, obs);
    }
    let far = farthest_from(line, partition).ok_or(HullError::NoFarthest {
        partition: partition.len(),
    })?;
    let f = partition[far];
    f.mark_hull();
    obs.mark_hull(f);
    obs.add_edge(line.p, f);
    obs.add_edge(f, line.q);
    obs.remove_edge(line.p, line.q);

    let s1 = partition_left(Baseline::new(line.p, f), partition);
    let s2 = partition_left(Baseline::new(f, line.q), partition);
    let (left, right) = rayon::join(
        || find_hull_parallel(&s1, Baseline::new(line.p, f), obs, cfg, depth + 1),
        || find_hull_parallel(&s2, Baseline::new(f, line.q), obs, cfg, depth + 1),
    );
    Ok(1 + left? + right?)
}
