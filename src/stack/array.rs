use super::EntityStack;
use crate::entity::Entity;
use crate::error::StackError;

pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded stack over a fixed ring of slots.
///
/// `top` is the slot the next push writes to. Once `len == capacity` every
/// push overwrites the logically oldest entity.
#[derive(Debug, Clone)]
pub struct ArrayStack {
    slots: Vec<Option<Entity>>,
    top: usize,
    len: usize,
}

impl ArrayStack {
    pub fn new() -> Self {
        Self {
            slots: vec![None; DEFAULT_CAPACITY],
            top: 0,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![None; capacity],
            top: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn previous(&self, index: usize) -> usize {
        if index == 0 {
            self.slots.len() - 1
        } else {
            index - 1
        }
    }
}

impl Default for ArrayStack {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStack for ArrayStack {
    fn push(&mut self, entity: Entity) {
        if self.top == self.slots.len() {
            self.top = 0;
        }
        // Replacing the slot drops whatever was overwritten
        self.slots[self.top] = Some(entity);
        self.top += 1;
        if self.len < self.slots.len() {
            self.len += 1;
        }
    }

    fn pop(&mut self) -> Result<Entity, StackError> {
        if self.len == 0 {
            return Err(StackError::Empty);
        }
        self.top = self.previous(self.top);
        self.len -= 1;
        self.slots[self.top].take().ok_or(StackError::Empty)
    }

    fn peek(&self) -> Result<&Entity, StackError> {
        if self.len == 0 {
            return Err(StackError::Empty);
        }
        self.slots[self.previous(self.top)]
            .as_ref()
            .ok_or(StackError::Empty)
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.top = 0;
        self.len = 0;
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Result<Box<dyn Iterator<Item = &Entity> + '_>, StackError> {
        Err(StackError::UnsupportedOperation("ArrayStack"))
    }
}
