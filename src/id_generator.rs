use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all entities
static NEXT_ENTITY_ID: AtomicUsize = AtomicUsize::new(1);

/// Identity of a drawn entity. Not part of its hash code or equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub fn generate_id() -> EntityId {
    EntityId(NEXT_ENTITY_ID.fetch_add(1, Ordering::SeqCst))
}
