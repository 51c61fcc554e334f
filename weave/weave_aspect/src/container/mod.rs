//! Aspect container.
//!
//! The container is the registry of aspects, pointcuts and advisors, and of
//! the resources (files) that define registered aspects.

mod in_memory;

pub use in_memory::InMemoryAspectContainer;

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use weave_core::error::{ContainerError, Result};

use crate::model::{Advisor, Aspect, Pointcut};

/// An entry registered in the container.
#[derive(Debug, Clone)]
pub enum ContainerEntry {
    /// An aspect.
    Aspect(Arc<Aspect>),

    /// A pointcut.
    Pointcut(Arc<dyn Pointcut>),

    /// An advisor.
    Advisor(Arc<Advisor>),
}

/// Trait for aspect containers.
///
/// A container exclusively owns everything registered in it. Registration is
/// idempotent by ID: registering an existing ID replaces the entry.
///
/// Loaders mutate the container and matcher callers read it. Implementations
/// shared between threads must serialize writers against readers.
pub trait AspectContainer: Send + Sync {
    /// Register an aspect.
    ///
    /// The aspect is tagged `aspect` and its defining file is added to the
    /// resources.
    fn register_aspect(&self, aspect: Aspect) -> Arc<Aspect>;

    /// Register a pointcut under `id`, tagged `pointcut`.
    fn register_pointcut(&self, pointcut: Arc<dyn Pointcut>, id: &str);

    /// Register an advisor under `id`, tagged `advisor`.
    fn register_advisor(&self, advisor: Arc<Advisor>, id: &str);

    /// Add a resource that contributes definitions.
    fn add_resource(&self, path: PathBuf);

    /// Get an aspect, if registered.
    fn find_aspect(&self, id: &str) -> Option<Arc<Aspect>>;

    /// Get a pointcut, if registered.
    fn find_pointcut(&self, id: &str) -> Option<Arc<dyn Pointcut>>;

    /// Get an advisor, if registered.
    fn find_advisor(&self, id: &str) -> Option<Arc<Advisor>>;

    /// Get every entry carrying `tag`, with its ID, in registration order.
    fn get_by_tag(&self, tag: &str) -> Vec<(String, ContainerEntry)>;

    /// Get every registered aspect in registration order.
    fn aspects(&self) -> Vec<Arc<Aspect>>;

    /// Get every registered advisor in registration order.
    fn advisors(&self) -> Vec<Arc<Advisor>>;

    /// Get the resources currently contributing definitions.
    fn resources(&self) -> BTreeSet<PathBuf>;

    /// Get an aspect.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<Aspect>)` - The aspect.
    /// * `Err` - `ContainerError::AspectNotFound` if no aspect has this ID.
    fn get_aspect(&self, id: &str) -> Result<Arc<Aspect>> {
        self.find_aspect(id)
            .ok_or_else(|| ContainerError::AspectNotFound(id.to_string()).into())
    }

    /// Get a pointcut.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<dyn Pointcut>)` - The pointcut.
    /// * `Err` - `ContainerError::PointcutNotFound` if no pointcut has this ID.
    fn get_pointcut(&self, id: &str) -> Result<Arc<dyn Pointcut>> {
        self.find_pointcut(id)
            .ok_or_else(|| ContainerError::PointcutNotFound(id.to_string()).into())
    }

    /// Get an advisor.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<Advisor>)` - The advisor.
    /// * `Err` - `ContainerError::AdvisorNotFound` if no advisor has this ID.
    fn get_advisor(&self, id: &str) -> Result<Arc<Advisor>> {
        self.find_advisor(id)
            .ok_or_else(|| ContainerError::AdvisorNotFound(id.to_string()).into())
    }
}
