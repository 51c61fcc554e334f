//! Aspect model.

use std::path::Path;
use std::sync::Arc;

use weave_core::ReflectedClass;

/// A unit of cross-cutting logic.
///
/// An aspect is identified by the fully-qualified name of its defining class
/// unless registered under an explicit ID, and remembers the file it was
/// defined in. It is immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Aspect {
    id: String,
    class: Arc<ReflectedClass>,
}

impl Aspect {
    /// Create an aspect identified by its class name.
    pub fn new(class: ReflectedClass) -> Self {
        Self {
            id: class.name.clone(),
            class: Arc::new(class),
        }
    }

    /// Create an aspect with an explicit ID.
    pub fn with_id(id: impl Into<String>, class: ReflectedClass) -> Self {
        Self {
            id: id.into(),
            class: Arc::new(class),
        }
    }

    /// The aspect ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The reflected defining class.
    pub fn class(&self) -> &ReflectedClass {
        &self.class
    }

    /// The name of the defining class.
    pub fn class_name(&self) -> &str {
        &self.class.name
    }

    /// The file the aspect is defined in.
    pub fn file(&self) -> &Path {
        self.class.file()
    }
}
