//! Open-addressing entity store.
//!
//! Slots are `None` (never used), a tombstone (an entity whose `active` flag
//! was cleared) or a live entity. The slot count is always a prime taken
//! from the table's own [`PrimeTable`], and the table grows to the next one
//! as soon as half the slots are live.

mod probe;

use log::debug;

use crate::config::StoreConfig;
use crate::entity::Entity;
use crate::error::PrimeError;
use crate::primes::PrimeTable;

/// Fraction of live slots that triggers a rehash on the next insert
pub const LOAD_FACTOR: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct EntityHashTable {
    slots: Vec<Option<Entity>>,
    /// Live entities only; tombstones are not counted
    count: usize,
    primes: PrimeTable,
}

impl EntityHashTable {
    /// Creates an empty table sized from the default configuration.
    pub fn new() -> Self {
        Self::from_primes(PrimeTable::default())
    }

    pub fn with_config(config: &StoreConfig) -> Result<Self, PrimeError> {
        let primes = PrimeTable::build(config.sieve_bound, config.initial_capacity_seed)?;
        Ok(Self::from_primes(primes))
    }

    fn from_primes(primes: PrimeTable) -> Self {
        Self {
            slots: vec![None; primes.current()],
            count: 0,
            primes,
        }
    }

    /// Stores `entity`, growing the table first if half the slots are live.
    ///
    /// Entities that are weakly equal to one already stored are inserted
    /// again rather than merged.
    pub fn insert(&mut self, entity: Entity) {
        self.enforce_load_factor();
        let slot = probe::insertion_slot(&self.slots, entity.hash_code());
        self.slots[slot] = Some(entity);
        self.count += 1;
    }

    /// Tombstones the stored entity weakly equal to `entity`.
    ///
    /// Returns whether anything was removed. Removing a non-member does
    /// nothing.
    pub fn remove(&mut self, entity: &Entity) -> bool {
        let slot = self.find_position(entity);
        match self.slots[slot].as_mut() {
            Some(stored) if stored.weak_eq(entity) => {
                stored.set_active(false);
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        let slot = self.find_position(entity);
        self.slots[slot]
            .as_ref()
            .is_some_and(|stored| stored.weak_eq(entity))
    }

    /// Slot holding a live entity weakly equal to `entity`, or the empty
    /// slot where it would go.
    pub fn find_position(&self, entity: &Entity) -> usize {
        probe::lookup_slot(&self.slots, entity)
    }

    /// Live entities in slot order. The order says nothing about when they
    /// were inserted.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.slots
            .iter()
            .flatten()
            .filter(|entity| entity.is_active())
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.count
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every entity and tombstone. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.count = 0;
    }

    fn enforce_load_factor(&mut self) {
        if self.count as f64 >= self.slots.len() as f64 * LOAD_FACTOR {
            self.rehash();
        }
    }

    /// Moves every live entity into a slot array of the next prime capacity.
    /// Tombstones are left behind.
    fn rehash(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = self.primes.advance();
        let mut new_slots: Vec<Option<Entity>> = vec![None; new_capacity];

        for entity in self.slots.drain(..).flatten().filter(Entity::is_active) {
            let slot = probe::rehash_slot(&new_slots, entity.hash_code());
            new_slots[slot] = Some(entity);
        }
        self.slots = new_slots;

        debug!(
            "Rehashed entity table: {} -> {} slots, {} live entities",
            old_capacity, new_capacity, self.count
        );
    }
}

impl Default for EntityHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityHashTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, entity) in self.entities().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entity)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{factory, Style};
    use egui::{pos2, vec2, Rect};

    fn square_at(x: f32) -> Entity {
        factory::rectangle(Rect::from_min_size(pos2(x, 0.0), vec2(2.0, 2.0)), Style::default())
    }

    fn small_table() -> EntityHashTable {
        let config = StoreConfig {
            sieve_bound: 1_000,
            ..StoreConfig::default()
        };
        EntityHashTable::with_config(&config).unwrap()
    }

    #[test]
    fn test_starts_at_first_prime_capacity() {
        let table = small_table();
        assert_eq!(table.capacity(), 11);
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "{}");
    }

    #[test]
    fn test_rehash_at_half_full() {
        let mut table = small_table();
        for i in 0..6 {
            table.insert(square_at(i as f32));
        }
        // 6 >= 5.5 only checked on the next insert
        assert_eq!(table.capacity(), 11);

        table.insert(square_at(6.0));
        assert_eq!(table.capacity(), 23);
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_rehash_drops_tombstones() {
        let mut table = small_table();
        let kept: Vec<Entity> = (0..3).map(|i| square_at(i as f32)).collect();
        let removed: Vec<Entity> = (10..13).map(|i| square_at(i as f32)).collect();
        for e in kept.iter().chain(&removed) {
            table.insert(e.clone());
        }
        for e in &removed {
            assert!(table.remove(e));
        }
        // Push the live count to the threshold and over it
        for i in 20..23 {
            table.insert(square_at(i as f32));
        }
        table.insert(square_at(30.0));
        assert_eq!(table.capacity(), 23);
        assert_eq!(table.len(), 7);
        assert_eq!(table.slots.iter().flatten().count(), 7);
        for e in &kept {
            assert!(table.contains(e));
        }
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut table = small_table();
        table.insert(square_at(1.0));
        assert!(!table.remove(&square_at(100.0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_find_position_of_non_member_is_empty() {
        let mut table = small_table();
        table.insert(square_at(1.0));
        let slot = table.find_position(&square_at(50.0));
        assert!(table.slots[slot].is_none());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut table = small_table();
        for i in 0..8 {
            table.insert(square_at(i as f32));
        }
        let capacity = table.capacity();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), capacity);
        assert_eq!(table.entities().count(), 0);
    }

    #[test]
    fn test_display_lists_entities() {
        let mut table = small_table();
        table.insert(square_at(1.0));
        assert_eq!(table.to_string(), "{rect (1,0,2,2)}");
    }
}
