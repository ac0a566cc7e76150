use log::debug;

use crate::config::StoreConfig;
use crate::entity::Entity;
use crate::error::StackError;
use crate::stack::{ArrayStack, EntityStack, LinkedStack};

/// Undo/redo over drawn entities.
///
/// `entities` holds what is on the canvas and never drops anything.
/// `garbage` holds undone entities in a bounded ring, so only the most
/// recent undos can be redone.
///
/// Recording a new entity does not clear `garbage`: after undo, draw, redo
/// the redone entity lands on top of the new one. Callers wanting strict
/// linear history clear the redo buffer themselves.
#[derive(Debug, Default)]
pub struct EntityHistory {
    entities: LinkedStack,
    garbage: ArrayStack,
}

impl EntityHistory {
    pub fn new() -> Self {
        Self {
            entities: LinkedStack::new(),
            garbage: ArrayStack::new(),
        }
    }

    pub fn with_config(config: &StoreConfig) -> Result<Self, StackError> {
        Ok(Self {
            entities: LinkedStack::new(),
            garbage: ArrayStack::with_capacity(config.garbage_capacity)?,
        })
    }

    /// Record a finished drawing
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Move the most recent entity to the redo buffer. Returns false when
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.entities.pop() {
            Ok(entity) => {
                debug!("Undo {} {}", entity.id(), entity);
                self.garbage.push(entity);
                true
            }
            Err(_) => false,
        }
    }

    /// Move the most recently undone entity back. Returns false when there
    /// was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.garbage.pop() {
            Ok(entity) => {
                debug!("Redo {} {}", entity.id(), entity);
                self.entities.push(entity);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns true if there are entities that can be undone
    pub fn can_undo(&self) -> bool {
        !self.entities.is_empty()
    }

    /// Returns true if there are entities that can be redone
    pub fn can_redo(&self) -> bool {
        !self.garbage.is_empty()
    }

    /// Forget everything, including the redo buffer
    pub fn clear(&mut self) {
        debug!(
            "Clearing history: {} entities, {} undone",
            self.entities.len(),
            self.garbage.len()
        );
        self.entities.clear();
        self.garbage.clear();
    }

    pub fn entities(&self) -> &LinkedStack {
        &self.entities
    }

    pub fn garbage(&self) -> &ArrayStack {
        &self.garbage
    }

    /// Entities oldest first, the order a canvas repaints them in
    pub fn redraw_order(&self) -> Vec<&Entity> {
        let mut order: Vec<&Entity> = self.entities.entities().collect();
        order.reverse();
        order
    }
}
