//! LIFO containers for drawn entities.
//!
//! [`LinkedStack`] is unbounded and never loses an entity. [`ArrayStack`] is
//! a fixed-size ring that overwrites its oldest entry once full; use it only
//! where losing old entries is acceptable, such as a bounded redo buffer.

mod array;
mod linked;

pub use array::{ArrayStack, DEFAULT_CAPACITY};
pub use linked::{Iter, LinkedStack};

use crate::entity::Entity;
use crate::error::StackError;

/// Common contract of both stack variants
pub trait EntityStack {
    /// Put an entity on top of the stack
    fn push(&mut self, entity: Entity);

    /// Remove and return the top entity
    fn pop(&mut self) -> Result<Entity, StackError>;

    /// The top entity, left in place
    fn peek(&self) -> Result<&Entity, StackError>;

    /// Drop every entity the stack holds
    fn clear(&mut self);

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Entities from top to bottom.
    ///
    /// Fails with [`StackError::UnsupportedOperation`] on variants that
    /// cannot be walked.
    fn iter(&self) -> Result<Box<dyn Iterator<Item = &Entity> + '_>, StackError>;
}
