//! Planar QuickHull over a caller-owned point collection.
//!
//! Purpose
//! - Partition points by signed orientation against a directed baseline,
//!   pick the farthest point per partition, and recurse until partitions
//!   run empty; hull membership lands in each point's flag.
//! - Sibling recursions are independent (disjoint partitions, read-only
//!   baselines) and the parallel entry point forks them via rayon.
//!
//! Boundary policy
//! - Partitions keep strictly-left points only (cross product > 0), so
//!   collinear inputs flag exactly their two extremes. See DESIGN.md.
//!
//! Code cross-refs: `quick_hull`, `quick_hull_parallel`, `Baseline`, `HullCfg`.

mod parallel;
pub mod rand;
mod solvers;
mod types;
mod util;

pub use parallel::quick_hull_parallel;
pub use solvers::quick_hull;
pub use types::{
    points_from_positions, reset_hull_flags, Baseline, HullCfg, HullError, Point, PointId,
};
pub use util::{distance_to_line, farthest_from, orientation, partition_left};
