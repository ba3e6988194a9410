//! Observer seam toward a rendering collaborator.
//!
//! The hull core owns no drawing, windowing, or I/O; it reports what it does
//! through this trait and works unchanged against [`NullObserver`]. Edges
//! are identified by point id, never by coordinate equality, so duplicate
//! coordinates cannot alias. Receivers take `&self` because concurrent
//! recursion branches share one handle; implementations that aggregate
//! state must lock internally. Within one recursive step the order is
//! fixed (mark F, add P–F, add F–Q, remove P–Q); across concurrent sibling
//! branches interleaving is unspecified.

use std::sync::{Mutex, PoisonError};

use crate::hull::{Point, PointId};

/// Surface the hull core requires from a visualization collaborator.
pub trait HullObserver: Sync {
    /// Replace the displayed point set; called once before construction.
    fn set_points(&self, points: &[Point]);
    /// Record a hull-boundary edge between two points.
    fn add_edge(&self, a: &Point, b: &Point);
    /// Drop a previously recorded edge, matching either endpoint order.
    fn remove_edge(&self, a: &Point, b: &Point);
    /// A point's hull flag just changed to true.
    fn mark_hull(&self, point: &Point);
}

/// The fully supported no-collaborator configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl HullObserver for NullObserver {
    fn set_points(&self, _points: &[Point]) {}
    fn add_edge(&self, _a: &Point, _b: &Point) {}
    fn remove_edge(&self, _a: &Point, _b: &Point) {}
    fn mark_hull(&self, _point: &Point) {}
}

/// One observer notification, as recorded by [`EdgeRecorder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullEvent {
    PointsSet { count: usize },
    EdgeAdded(PointId, PointId),
    EdgeRemoved(PointId, PointId),
    HullMarked(PointId),
}

/// Mutex-guarded event log plus the live edge set, for tests and for
/// frontends that replay the construction.
#[derive(Debug, Default)]
pub struct EdgeRecorder {
    state: Mutex<RecorderState>,
}

#[derive(Debug, Default)]
struct RecorderState {
    events: Vec<HullEvent>,
    edges: Vec<(PointId, PointId)>,
}

impl EdgeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notification in arrival order.
    pub fn events(&self) -> Vec<HullEvent> {
        self.lock().events.clone()
    }

    /// Snapshot of the edges currently alive (added and not yet removed).
    pub fn edges(&self) -> Vec<(PointId, PointId)> {
        self.lock().edges.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HullObserver for EdgeRecorder {
    fn set_points(&self, points: &[Point]) {
        let mut s = self.lock();
        s.edges.clear();
        s.events.push(HullEvent::PointsSet {
            count: points.len(),
        });
    }

    fn add_edge(&self, a: &Point, b: &Point) {
        let mut s = self.lock();
        s.edges.push((a.id, b.id));
        s.events.push(HullEvent::EdgeAdded(a.id, b.id));
    }

    fn remove_edge(&self, a: &Point, b: &Point) {
        let mut s = self.lock();
        s.edges
            .retain(|&(x, y)| !((x == a.id && y == b.id) || (x == b.id && y == a.id)));
        s.events.push(HullEvent::EdgeRemoved(a.id, b.id));
    }

    fn mark_hull(&self, point: &Point) {
        self.lock().events.push(HullEvent::HullMarked(point.id));
    }
}
