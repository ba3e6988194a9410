//! Core types for the QuickHull pass: points, baselines, config, errors.
//!
//! - `Point`: caller-owned position plus an atomic hull-membership flag.
//! - `Baseline`: directed reference line for one recursive call.
//! - `HullCfg`: fan-out bounds for the parallel variant.
//! - `HullError`: precondition and invariant failures, per phase.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use nalgebra::Vector2;

/// Stable, caller-assigned point identity. Two points with equal coordinates
/// are still distinct if their ids differ; all endpoint exclusion and edge
/// matching goes through ids, never through coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A planar point with a hull-membership flag.
///
/// The flag is atomic so that disjoint recursion branches may set it without
/// a lock. `Relaxed` suffices: each flag is written by at most one task, and
/// readers only look after the fork-join barrier.
#[derive(Debug)]
pub struct Point {
    pub id: PointId,
    pub pos: Vector2<f64>,
    hull: AtomicBool,
}

impl Point {
    #[inline]
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Self {
            id,
            pos: Vector2::new(x, y),
            hull: AtomicBool::new(false),
        }
    }

    /// True once the algorithm has placed this point on the hull boundary.
    #[inline]
    pub fn on_hull(&self) -> bool {
        self.hull.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn mark_hull(&self) {
        self.hull.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn clear_hull(&self) {
        self.hull.store(false, Ordering::Relaxed);
    }
}

impl Clone for Point {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            pos: self.pos,
            hull: AtomicBool::new(self.on_hull()),
        }
    }
}

/// Build a point collection with sequential ids and cleared hull flags.
pub fn points_from_positions(positions: &[Vector2<f64>]) -> Vec<Point> {
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(PointId(i as u32), p.x, p.y))
        .collect()
}

/// Clear every hull flag, e.g. before re-running on the same collection.
pub fn reset_hull_flags(points: &[Point]) {
    for p in points {
        p.clear_hull();
    }
}

/// Directed reference line P→Q for one recursive call. Passed by value;
/// the endpoints are read-only shares of caller-owned points.
#[derive(Clone, Copy, Debug)]
pub struct Baseline<'a> {
    pub p: &'a Point,
    pub q: &'a Point,
}

impl<'a> Baseline<'a> {
    #[inline]
    pub fn new(p: &'a Point, q: &'a Point) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn is_endpoint(&self, x: &Point) -> bool {
        x.id == self.p.id || x.id == self.q.id
    }
}

/// Fan-out bounds for `quick_hull_parallel`.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Partitions smaller than this recurse sequentially on the current worker.
    pub spawn_cutoff: usize,
    /// Recursion depth beyond which no further sibling pairs are forked.
    pub spawn_depth: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            spawn_cutoff: 256,
            spawn_depth: 16,
        }
    }
}

/// Failures surfaced by the hull pass. Preconditions (`NeedPoints`,
/// `DegenerateBaseline`) indicate malformed input; `NoFarthest` indicates an
/// internal invariant break and never a recoverable state. There is no
/// partial-success mode: on error no hull flags are trustworthy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    NeedPoints { got: usize },
    DegenerateBaseline,
    NoFarthest { partition: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NeedPoints { got } => {
                write!(f, "pivot selection needs at least 2 points (got {got})")
            }
            HullError::DegenerateBaseline => {
                write!(f, "pivot selection found coincident extremes (all points equal)")
            }
            HullError::NoFarthest { partition } => write!(
                f,
                "farthest-point search found no candidate in a partition of {partition} points"
            ),
        }
    }
}
