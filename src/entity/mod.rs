use egui::{Color32, Pos2, Rect};

mod bounded;
mod common;
mod line;

pub use bounded::{Ellipse, Rectangle};
pub use line::Line;

use crate::id_generator::{self, EntityId};

/// The closed set of shapes the canvas can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
}

/// Geometry every shape variant supplies to the storage layer
pub trait ShapeGeometry {
    /// Which variant this is; part of entity equality
    fn kind(&self) -> ShapeKind;

    /// Sum of the shape's numeric geometry fields in whole pixels
    fn geometry_sum(&self) -> i64;

    /// Get the bounding rectangle for this shape
    fn bounds(&self) -> Rect;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl ShapeGeometry for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(l) => l.kind(),
            Shape::Rectangle(r) => r.kind(),
            Shape::Ellipse(e) => e.kind(),
        }
    }

    fn geometry_sum(&self) -> i64 {
        match self {
            Shape::Line(l) => l.geometry_sum(),
            Shape::Rectangle(r) => r.geometry_sum(),
            Shape::Ellipse(e) => e.geometry_sum(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Shape::Line(l) => l.bounds(),
            Shape::Rectangle(r) => r.bounds(),
            Shape::Ellipse(e) => e.bounds(),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Line(l) => write!(f, "{}", l),
            Shape::Rectangle(r) => write!(f, "{}", r),
            Shape::Ellipse(e) => write!(f, "{}", e),
        }
    }
}

/// How an entity was painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color32,
    pub stroke_width: f32,
    /// Only meaningful for rectangles and ellipses
    pub filled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            stroke_width: 3.0,
            filled: false,
        }
    }
}

/// A finished drawing handed to storage by the canvas.
///
/// Geometry and style never change once built. The only mutable state is
/// the `active` flag, which the hash table clears on removal.
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    shape: Shape,
    style: Style,
    active: bool,
}

impl Entity {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self {
            id: id_generator::generate_id(),
            shape,
            style,
            active: true,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Geometry sum plus the color and stroke width encodings.
    ///
    /// The kind does not participate, so a rectangle and an ellipse with the
    /// same bounds and style share a hash code.
    pub fn hash_code(&self) -> i64 {
        self.shape
            .geometry_sum()
            .wrapping_add(common::color_code(self.style.color))
            .wrapping_add(common::stroke_code(self.style.stroke_width))
    }

    /// Approximate equality used by the hash table.
    ///
    /// Holds when both entities are active, share a hash code and are the
    /// same kind of shape. Different geometry with a colliding hash compares
    /// equal.
    pub fn weak_eq(&self, other: &Entity) -> bool {
        self.active
            && other.active
            && self.hash_code() == other.hash_code()
            && self.kind() == other.kind()
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.shape)
    }
}

/// Accumulates points while a line is being dragged out
#[derive(Debug, Clone)]
pub struct LineBuilder {
    points: Vec<Pos2>,
    style: Style,
}

impl LineBuilder {
    pub fn new(style: Style) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    // Get a reference to the points for preview
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn finish(self) -> Entity {
        Entity::new(Shape::Line(Line::new(self.points)), self.style)
    }
}

/// Factory functions for creating entities
pub mod factory {
    use super::*;

    pub fn line(points: Vec<Pos2>, style: Style) -> Entity {
        Entity::new(Shape::Line(Line::new(points)), style)
    }

    pub fn rectangle(rect: Rect, style: Style) -> Entity {
        Entity::new(Shape::Rectangle(Rectangle::new(rect)), style)
    }

    pub fn ellipse(rect: Rect, style: Style) -> Entity {
        Entity::new(Shape::Ellipse(Ellipse::new(rect)), style)
    }
}
