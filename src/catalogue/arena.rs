use std::{collections::HashMap, sync::Arc};

use crate::shared::Identifiable;

/// Append-only storage with a name index.
/// Indexes handed out by [`Arena::push`] are never invalidated.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    items: Vec<T>,
    lookup: HashMap<Arc<str>, u32>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            lookup: HashMap::new(),
        }
    }
}

impl<T: Identifiable> Arena<T> {
    /// Index the next pushed item will receive.
    pub fn next_index(&self) -> u32 {
        self.items.len() as u32
    }

    /// Stores the item and points its name at it.
    /// A previous item with the same name stays in the arena but is no longer found by name.
    pub fn push(&mut self, item: T) -> u32 {
        let index = self.next_index();
        self.lookup.insert(item.name().clone(), index);
        self.items.push(item);
        index
    }

    pub fn find(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    pub fn get(&self, index: u32) -> Option<&T> {
        self.items.get(index as usize)
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.items.get_mut(index as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
