use super::EntityStack;
use crate::entity::Entity;
use crate::error::StackError;

#[derive(Debug)]
struct Node {
    entity: Entity,
    next: Option<Box<Node>>,
}

/// Unbounded stack of singly-linked nodes; the front is the top.
#[derive(Debug, Default)]
pub struct LinkedStack {
    front: Option<Box<Node>>,
    len: usize,
}

impl LinkedStack {
    pub fn new() -> Self {
        Self { front: None, len: 0 }
    }

    /// Entities from top to bottom
    pub fn entities(&self) -> Iter<'_> {
        Iter {
            next: self.front.as_deref(),
        }
    }
}

impl EntityStack for LinkedStack {
    fn push(&mut self, entity: Entity) {
        let next = self.front.take();
        self.front = Some(Box::new(Node { entity, next }));
        self.len += 1;
    }

    fn pop(&mut self) -> Result<Entity, StackError> {
        let node = self.front.take().ok_or(StackError::Empty)?;
        self.front = node.next;
        self.len -= 1;
        Ok(node.entity)
    }

    fn peek(&self) -> Result<&Entity, StackError> {
        self.front
            .as_ref()
            .map(|node| &node.entity)
            .ok_or(StackError::Empty)
    }

    fn clear(&mut self) {
        // Unlink node by node so a long history doesn't recurse in Drop
        let mut current = self.front.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Result<Box<dyn Iterator<Item = &Entity> + '_>, StackError> {
        Ok(Box::new(self.entities()))
    }
}

impl Drop for LinkedStack {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Walks a [`LinkedStack`] from top to bottom
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entity;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.entity
        })
    }
}
