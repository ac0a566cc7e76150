//! The three probe sequences used by [`EntityHashTable`](super::EntityHashTable).
//!
//! They are deliberately kept separate. Insertion and rehashing both probe
//! `|h| + k²`, but insertion reuses tombstoned slots while rehashing treats
//! every filled slot as taken. Lookup walks `h + 1 + 3 + 5 + ...`, which
//! lands on the same offsets, but starts from `|h mod size|` and stops at the
//! first empty slot or weak match.

use log::debug;

use crate::entity::Entity;

fn is_live(slot: &Option<Entity>) -> bool {
    matches!(slot, Some(entity) if entity.is_active())
}

/// Slot for a new entity: the first empty or tombstoned slot on
/// `(|h| + k²) mod size`, k = 0, 1, 2, ...
///
/// Terminates while fewer than half the slots are live and `size` is prime.
pub(super) fn insertion_slot(slots: &[Option<Entity>], hash: i64) -> usize {
    let size = slots.len() as u64;
    let base = hash.unsigned_abs();
    let mut slot = base % size;
    let mut offset: u64 = 1;
    while is_live(&slots[slot as usize]) {
        slot = (base + offset * offset) % size;
        offset += 1;
    }
    slot as usize
}

/// Slot for an entity being moved into a freshly grown array. Any filled
/// slot counts as taken.
pub(super) fn rehash_slot(slots: &[Option<Entity>], hash: i64) -> usize {
    let size = slots.len() as u64;
    let base = hash.unsigned_abs();
    let mut slot = base % size;
    let mut offset: u64 = 1;
    while slots[slot as usize].is_some() {
        slot = (base + offset * offset) % size;
        offset += 1;
    }
    slot as usize
}

/// Where `query` sits, or the empty slot where it would sit.
///
/// Steps grow by two each probe and wrap by subtraction. Gives up after
/// `size` probes, which covers every slot the sequence can reach; the slot
/// returned then holds neither the query nor an empty slot, and callers
/// re-check it.
pub(super) fn lookup_slot(slots: &[Option<Entity>], query: &Entity) -> usize {
    let size = slots.len();
    let mut slot = (query.hash_code() % size as i64).unsigned_abs() as usize;
    let mut step = 1;
    for _ in 0..size {
        match &slots[slot] {
            Some(stored) if !stored.weak_eq(query) => {}
            _ => return slot,
        }
        slot += step;
        step += 2;
        while slot >= size {
            slot -= size;
        }
    }
    debug!(
        "Lookup for {} exhausted {} probes without reaching an empty slot",
        query, size
    );
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{factory, Style};
    use egui::{pos2, vec2, Rect};

    fn entity_at(x: f32) -> Entity {
        factory::rectangle(Rect::from_min_size(pos2(x, 0.0), vec2(1.0, 1.0)), Style::default())
    }

    #[test]
    fn test_insertion_reuses_tombstones() {
        let mut slots: Vec<Option<Entity>> = vec![None; 7];
        let e = entity_at(0.0);
        let home = insertion_slot(&slots, e.hash_code());

        let mut dead = e.clone();
        dead.set_active(false);
        slots[home] = Some(dead);

        assert_eq!(insertion_slot(&slots, e.hash_code()), home);
        // Rehashing sees the tombstone as taken
        assert_ne!(rehash_slot(&slots, e.hash_code()), home);
    }

    #[test]
    fn test_insertion_probes_quadratically() {
        let e = entity_at(0.0);
        let size = 11u64;
        let base = e.hash_code().unsigned_abs();
        let mut slots: Vec<Option<Entity>> = vec![None; size as usize];
        slots[(base % size) as usize] = Some(e.clone());
        slots[((base + 1) % size) as usize] = Some(e.clone());

        assert_eq!(
            insertion_slot(&slots, e.hash_code()) as u64,
            (base + 4) % size
        );
    }

    #[test]
    fn test_lookup_finds_inserted_entity() {
        let mut slots: Vec<Option<Entity>> = vec![None; 11];
        let entities: Vec<Entity> = (0..5).map(|i| entity_at(i as f32 * 11.0)).collect();
        for e in &entities {
            let slot = insertion_slot(&slots, e.hash_code());
            slots[slot] = Some(e.clone());
        }
        for e in &entities {
            let slot = lookup_slot(&slots, e);
            assert!(slots[slot].as_ref().is_some_and(|s| s.weak_eq(e)));
        }
    }

    #[test]
    fn test_negative_hash_insert_and_lookup_agree() {
        let style = Style {
            stroke_width: -3.0,
            ..Style::default()
        };
        let e = factory::rectangle(Rect::from_min_size(pos2(0.0, 0.0), vec2(1.0, 1.0)), style);
        assert!(e.hash_code() < 0);

        let size = 11u64;
        let base = e.hash_code().unsigned_abs();
        let home = (base % size) as usize;
        let mut slots: Vec<Option<Entity>> = vec![None; size as usize];
        assert_eq!(insertion_slot(&slots, e.hash_code()), home);
        assert_eq!(lookup_slot(&slots, &e), home);

        // A different live entity at home pushes both one step along
        slots[home] = Some(entity_at(1.0));
        let slot = insertion_slot(&slots, e.hash_code());
        assert_eq!(slot as u64, (base + 1) % size);
        slots[slot] = Some(e.clone());
        assert_eq!(lookup_slot(&slots, &e), slot);
    }

    #[test]
    fn test_lookup_miss_lands_on_empty_slot() {
        let slots: Vec<Option<Entity>> = vec![None; 7];
        let e = entity_at(3.0);
        assert!(slots[lookup_slot(&slots, &e)].is_none());
    }

    #[test]
    fn test_lookup_terminates_when_every_slot_is_tombstoned() {
        let e = entity_at(0.0);
        let mut dead = entity_at(1.0);
        dead.set_active(false);
        let slots: Vec<Option<Entity>> = vec![Some(dead); 5];
        let slot = lookup_slot(&slots, &e);
        assert!(slot < 5);
    }
}
