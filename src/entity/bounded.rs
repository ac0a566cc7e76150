//! Shapes defined by a bounding rectangle: rectangles and the ellipses
//! inscribed in them. Both hash the same way; only their kind differs.

use egui::Rect;

use super::common;
use super::{ShapeGeometry, ShapeKind};

fn rect_sum(rect: &Rect) -> i64 {
    common::pixel(rect.min.x)
        .wrapping_add(common::pixel(rect.min.y))
        .wrapping_add(common::pixel(rect.height()))
        .wrapping_add(common::pixel(rect.width()))
}

fn fmt_rect(f: &mut std::fmt::Formatter<'_>, name: &str, rect: &Rect) -> std::fmt::Result {
    write!(
        f,
        "{} ({},{},{},{})",
        name,
        common::pixel(rect.min.x),
        common::pixel(rect.min.y),
        common::pixel(rect.height()),
        common::pixel(rect.width())
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    rect: Rect,
}

impl Rectangle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

impl ShapeGeometry for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn geometry_sum(&self) -> i64 {
        rect_sum(&self.rect)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_rect(f, "rect", &self.rect)
    }
}

/// The largest ellipse that fits inside its bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    rect: Rect,
}

impl Ellipse {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

impl ShapeGeometry for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn geometry_sum(&self) -> i64 {
        rect_sum(&self.rect)
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

impl std::fmt::Display for Ellipse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_rect(f, "ellipse", &self.rect)
    }
}
