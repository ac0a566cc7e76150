use egui::{Pos2, Rect};

use super::common;
use super::{ShapeGeometry, ShapeKind};

/// Freehand polyline recorded while the pointer was dragged
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    points: Vec<Pos2>,
}

impl Line {
    pub fn new(points: Vec<Pos2>) -> Self {
        Self { points }
    }

    /// Get the points that make up this line
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

impl ShapeGeometry for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn geometry_sum(&self) -> i64 {
        let coordinates = self.points.iter().fold(0i64, |sum, p| {
            sum.wrapping_add(common::pixel(p.x))
                .wrapping_add(common::pixel(p.y))
        });
        coordinates.wrapping_add(self.points.len() as i64)
    }

    fn bounds(&self) -> Rect {
        common::calculate_bounds(&self.points)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line [{} points]", self.points.len())
    }
}
