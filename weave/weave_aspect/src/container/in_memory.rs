//! In-memory aspect container.
//!
//! This module provides an in-memory implementation of the aspect container.

use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use weave_core::id::{ADVISOR_TAG, ASPECT_TAG, POINTCUT_TAG};

use super::{AspectContainer, ContainerEntry};
use crate::model::{Advisor, Aspect, Pointcut};

/// An in-memory aspect container.
///
/// Clones share the same registry. All state sits behind one reader-writer
/// lock, so a registration is never observed half-done.
#[derive(Clone, Default)]
pub struct InMemoryAspectContainer {
    registry: Arc<RwLock<Registry>>,
}

#[derive(Default)]
struct Registry {
    aspects: Slots<Arc<Aspect>>,
    pointcuts: Slots<Arc<dyn Pointcut>>,
    advisors: Slots<Arc<Advisor>>,
    tags: HashMap<String, Vec<(EntryKind, String)>>,
    resources: BTreeSet<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Aspect,
    Pointcut,
    Advisor,
}

/// Values by ID in first-registration order.
struct Slots<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Clone> Slots<T> {
    /// Insert or replace in place. Returns `true` if the ID was new.
    fn put(&mut self, id: &str, value: T) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.entries[i].1 = value;
                false
            }
            None => {
                self.index.insert(id.to_string(), self.entries.len());
                self.entries.push((id.to_string(), value));
                true
            }
        }
    }

    fn get(&self, id: &str) -> Option<T> {
        self.index.get(id).map(|&i| self.entries[i].1.clone())
    }

    fn values(&self) -> Vec<T> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl Registry {
    fn tag(&mut self, tag: &str, kind: EntryKind, id: &str) {
        let tagged = self.tags.entry(tag.to_string()).or_default();
        if !tagged.iter().any(|(k, i)| *k == kind && i == id) {
            tagged.push((kind, id.to_string()));
        }
    }

    fn entry(&self, kind: EntryKind, id: &str) -> Option<ContainerEntry> {
        match kind {
            EntryKind::Aspect => self.aspects.get(id).map(ContainerEntry::Aspect),
            EntryKind::Pointcut => self.pointcuts.get(id).map(ContainerEntry::Pointcut),
            EntryKind::Advisor => self.advisors.get(id).map(ContainerEntry::Advisor),
        }
    }
}

impl InMemoryAspectContainer {
    /// Create a new in-memory aspect container.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AspectContainer for InMemoryAspectContainer {
    fn register_aspect(&self, aspect: Aspect) -> Arc<Aspect> {
        let aspect = Arc::new(aspect);
        let mut registry = self.registry.write();

        registry.aspects.put(aspect.id(), aspect.clone());
        registry.tag(ASPECT_TAG, EntryKind::Aspect, aspect.id());
        registry.resources.insert(aspect.file().to_path_buf());

        debug!(aspect = aspect.id(), file = %aspect.file().display(), "Registered aspect");
        aspect
    }

    fn register_pointcut(&self, pointcut: Arc<dyn Pointcut>, id: &str) {
        let mut registry = self.registry.write();
        let added = registry.pointcuts.put(id, pointcut);
        registry.tag(POINTCUT_TAG, EntryKind::Pointcut, id);

        debug!(pointcut = id, replaced = !added, "Registered pointcut");
    }

    fn register_advisor(&self, advisor: Arc<Advisor>, id: &str) {
        let mut registry = self.registry.write();
        let added = registry.advisors.put(id, advisor);
        registry.tag(ADVISOR_TAG, EntryKind::Advisor, id);

        debug!(advisor = id, replaced = !added, "Registered advisor");
    }

    fn add_resource(&self, path: PathBuf) {
        self.registry.write().resources.insert(path);
    }

    fn find_aspect(&self, id: &str) -> Option<Arc<Aspect>> {
        self.registry.read().aspects.get(id)
    }

    fn find_pointcut(&self, id: &str) -> Option<Arc<dyn Pointcut>> {
        self.registry.read().pointcuts.get(id)
    }

    fn find_advisor(&self, id: &str) -> Option<Arc<Advisor>> {
        self.registry.read().advisors.get(id)
    }

    fn get_by_tag(&self, tag: &str) -> Vec<(String, ContainerEntry)> {
        let registry = self.registry.read();
        let Some(tagged) = registry.tags.get(tag) else {
            return Vec::new();
        };

        tagged
            .iter()
            .filter_map(|(kind, id)| registry.entry(*kind, id).map(|e| (id.clone(), e)))
            .collect()
    }

    fn aspects(&self) -> Vec<Arc<Aspect>> {
        self.registry.read().aspects.values()
    }

    fn advisors(&self) -> Vec<Arc<Advisor>> {
        self.registry.read().advisors.values()
    }

    fn resources(&self) -> BTreeSet<PathBuf> {
        self.registry.read().resources.clone()
    }
}
