//! Items produced by loader extensions.
//!
//! Loader extensions return pointcuts and advisors uniformly as
//! `LoadedItem`s so the container can route them without inspecting types.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::advisor::Advisor;
use super::pointcut::Pointcut;

/// A pointcut or an advisor produced while loading an aspect.
#[derive(Debug, Clone)]
pub enum LoadedItem {
    /// A named pointcut.
    Pointcut(Arc<dyn Pointcut>),

    /// An advisor.
    Advisor(Arc<Advisor>),
}

/// Loaded items by ID, in production order.
///
/// Insertion is first-wins: an item whose ID is already present is dropped.
// TODO: revisit whether later extensions should be able to override earlier
// ones once extension priorities exist; first-wins is relied upon today.
#[derive(Debug, Clone, Default)]
pub struct LoadedItems {
    entries: Vec<(String, LoadedItem)>,
    index: HashMap<String, usize>,
}

impl LoadedItems {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item unless its ID is taken.
    ///
    /// Returns `true` if the item was inserted.
    pub fn insert(&mut self, id: impl Into<String>, item: LoadedItem) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            warn!(id = %id, "Duplicate loaded item, keeping the earlier one");
            return false;
        }

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, item));
        true
    }

    /// Insert a pointcut unless its ID is taken.
    pub fn insert_pointcut(&mut self, id: impl Into<String>, pointcut: Arc<dyn Pointcut>) -> bool {
        self.insert(id, LoadedItem::Pointcut(pointcut))
    }

    /// Insert an advisor under its own ID unless that ID is taken.
    pub fn insert_advisor(&mut self, advisor: Advisor) -> bool {
        let id = advisor.id().to_string();
        self.insert(id, LoadedItem::Advisor(Arc::new(advisor)))
    }

    /// Merge `other` into this collection, keeping existing entries on
    /// collision.
    pub fn merge(&mut self, other: LoadedItems) {
        for (id, item) in other.entries {
            self.insert(id, item);
        }
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<&LoadedItem> {
        self.index.get(id).map(|&i| &self.entries[i].1)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over items in production order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LoadedItem)> {
        self.entries.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Iterate over the IDs in production order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

impl IntoIterator for LoadedItems {
    type Item = (String, LoadedItem);
    type IntoIter = std::vec::IntoIter<(String, LoadedItem)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
