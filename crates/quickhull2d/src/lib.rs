//! Convex hulls of planar point sets via QuickHull, with optional fork-join
//! parallelism across independent recursive subproblems.
//!
//! The core consumes a caller-owned point collection, sets a hull flag on
//! each boundary vertex, and optionally reports edge/point events to a
//! visualization collaborator through [`observer::HullObserver`]. Rendering,
//! point loading, and CLI glue live outside this crate.

pub mod hull;
pub mod observer;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{scatter, ScatterCfg};
    pub use crate::hull::{
        points_from_positions, quick_hull, quick_hull_parallel, reset_hull_flags, Baseline,
        HullCfg, HullError, Point, PointId,
    };
    pub use crate::observer::{EdgeRecorder, HullEvent, HullObserver, NullObserver};
    pub use nalgebra::Vector2 as Vec2;
}
