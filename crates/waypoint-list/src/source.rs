//! Point Sources
//!
//! Where the list gets its records from. The presenter reads a source exactly
//! once per `init` and keeps its own snapshot.

use crate::mock::mock_points;
use crate::model::Waypoint;

/// Number of sample points the default model starts with
pub const DEFAULT_POINT_COUNT: usize = 6;

/// Ordered, read-only supply of waypoints
pub trait PointSource {
    /// Snapshot of all points in display order
    fn points(&self) -> Vec<Waypoint>;
}

/// In-memory point source
#[derive(Debug, Clone, Default)]
pub struct PointsModel {
    points: Vec<Waypoint>,
}

impl PointsModel {
    pub fn new(points: Vec<Waypoint>) -> Self {
        Self { points }
    }

    /// Model filled with `count` sample points
    pub fn with_mock(count: usize) -> Self {
        Self::new(mock_points(count))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point. Presenters already initialized keep their old snapshot.
    pub fn push(&mut self, point: Waypoint) {
        self.points.push(point);
    }
}

impl PointSource for PointsModel {
    fn points(&self) -> Vec<Waypoint> {
        self.points.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_point;

    #[test]
    fn test_snapshot_is_detached() {
        let mut model = PointsModel::with_mock(2);
        let snapshot = model.points();
        model.push(mock_point(9));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(model.len(), 3);
    }
}
