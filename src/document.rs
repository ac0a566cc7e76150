use egui::{Color32, Pos2, Rect};

use crate::config::StoreConfig;
use crate::entity::{factory, Entity, LineBuilder, ShapeKind, Style};
use crate::error::StackError;
use crate::history::EntityHistory;
use crate::id_generator::EntityId;

/// A rectangle or ellipse being dragged out from its first corner
#[derive(Debug, Clone, Copy)]
struct BoxDrag {
    kind: ShapeKind,
    anchor: Pos2,
    corner: Pos2,
}

impl BoxDrag {
    fn rect(&self) -> Rect {
        Rect::from_two_pos(self.anchor, self.corner)
    }
}

/// A drawing session: the brush the canvas paints with, the shape that may be
/// mid-drag, and the undo history of everything finished so far.
#[derive(Debug, Default)]
pub struct Document {
    history: EntityHistory,
    brush: Style,
    current_line: Option<LineBuilder>,
    current_box: Option<BoxDrag>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &StoreConfig) -> Result<Self, StackError> {
        Ok(Self {
            history: EntityHistory::with_config(config)?,
            brush: Style::default(),
            current_line: None,
            current_box: None,
        })
    }

    pub fn brush(&self) -> Style {
        self.brush
    }

    pub fn set_color(&mut self, color: Color32) {
        self.brush.color = color;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.brush.stroke_width = width;
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.brush.filled = filled;
    }

    /// Rectangle spanning two drag corners, in any order
    pub fn draw_rectangle(&mut self, from: Pos2, to: Pos2) -> EntityId {
        self.commit(factory::rectangle(Rect::from_two_pos(from, to), self.brush))
    }

    /// Ellipse inscribed in the rectangle spanning two drag corners
    pub fn draw_ellipse(&mut self, from: Pos2, to: Pos2) -> EntityId {
        self.commit(factory::ellipse(Rect::from_two_pos(from, to), self.brush))
    }

    /// Starts dragging a rectangle, discarding any unfinished shape
    pub fn begin_rectangle(&mut self, anchor: Pos2) {
        self.begin_box(ShapeKind::Rectangle, anchor);
    }

    /// Starts dragging an ellipse, discarding any unfinished shape
    pub fn begin_ellipse(&mut self, anchor: Pos2) {
        self.begin_box(ShapeKind::Ellipse, anchor);
    }

    fn begin_box(&mut self, kind: ShapeKind, anchor: Pos2) {
        self.current_line = None;
        self.current_box = Some(BoxDrag {
            kind,
            anchor,
            corner: anchor,
        });
    }

    /// Moves the free corner of the rectangle or ellipse being dragged
    pub fn drag_box(&mut self, corner: Pos2) {
        if let Some(drag) = self.current_box.as_mut() {
            drag.corner = corner;
        }
    }

    pub fn box_preview(&self) -> Option<(ShapeKind, Rect)> {
        self.current_box.map(|drag| (drag.kind, drag.rect()))
    }

    /// Commits the rectangle or ellipse being dragged. `None` if none was started.
    pub fn finish_box(&mut self) -> Option<EntityId> {
        let drag = self.current_box.take()?;
        let entity = match drag.kind {
            ShapeKind::Ellipse => factory::ellipse(drag.rect(), self.brush),
            _ => factory::rectangle(drag.rect(), self.brush),
        };
        Some(self.commit(entity))
    }

    /// Starts a freehand line, discarding any unfinished shape
    pub fn begin_line(&mut self, start: Pos2) {
        let mut builder = LineBuilder::new(self.brush);
        builder.add_point(start);
        self.current_box = None;
        self.current_line = Some(builder);
    }

    pub fn extend_line(&mut self, point: Pos2) {
        if let Some(builder) = self.current_line.as_mut() {
            builder.add_point(point);
        }
    }

    /// Points of the line being dragged, for preview
    pub fn line_preview(&self) -> Option<&[Pos2]> {
        self.current_line.as_ref().map(LineBuilder::points)
    }

    /// Commits the line being dragged. `None` if no line was started.
    pub fn finish_line(&mut self) -> Option<EntityId> {
        let builder = self.current_line.take()?;
        Some(self.commit(builder.finish()))
    }

    /// Records a finished entity. The redo buffer is left as it is.
    pub fn commit(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        self.history.push(entity);
        id
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Wipes the canvas, its redo buffer and any shape in progress
    pub fn clear(&mut self) {
        self.current_line = None;
        self.current_box = None;
        self.history.clear();
    }

    /// Finished entities, oldest first
    pub fn visible_entities(&self) -> Vec<&Entity> {
        self.history.redraw_order()
    }

    pub fn history(&self) -> &EntityHistory {
        &self.history
    }
}
