//! # Entity Store
//!
//! The state owned by a `ResourceActor`: entities in creation order plus the
//! sequence counter ids are minted from. Only the actor task touches it, so
//! it needs no locking.

use crate::entity::ActorEntity;

/// Ordered in-memory collection of entities with a monotonic id counter.
///
/// The counter starts at 1 and only advances when an entity is inserted, so a
/// creation that fails validation leaves no gap. Removals never rewind it.
pub struct EntityStore<T: ActorEntity> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// The id the next inserted entity will carry.
    pub fn upcoming_id(&self) -> T::Id {
        T::Id::from(self.next_id)
    }

    /// Appends an entity built from [`upcoming_id`](Self::upcoming_id) and
    /// advances the counter.
    pub fn insert(&mut self, item: T) {
        debug_assert!(*item.id() == self.upcoming_id());
        self.items.push(item);
        self.next_id += 1;
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Snapshot of every entity, oldest first.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Removes an entity, keeping the relative order of the survivors.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
