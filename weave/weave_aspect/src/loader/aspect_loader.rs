//! Aspect loader.
//!
//! This module runs loader extensions over aspects and keeps the container's
//! pointcuts and advisors in sync with the resources defining aspects.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, trace};

use weave_core::error::{ContainerError, Result};
use weave_core::id::{split_member_id, ASPECT_TAG};
use weave_core::{AnnotationReader, PointKind, ReflectionPoint};

use super::declare_parents::DeclareParentsExtension;
use super::extension::{AspectLoaderExtension, LoaderKind, LoaderTarget};
use super::general::AdviceAnnotationExtension;
use crate::container::{AspectContainer, ContainerEntry};
use crate::model::{Advisor, Aspect, LoadedItem, LoadedItems};

/// Loads pointcuts and advisors out of aspects into a container.
///
/// Extensions are registered once at bootstrap. The loader remembers which
/// resources it has already scanned so repeated incremental passes only
/// touch aspects defined in new resources.
///
/// The loader is the only writer of the container's pointcuts and advisors.
/// `load_and_register_changed` reads the resource set and then writes the
/// snapshot; it takes `&mut self` so passes cannot interleave.
pub struct AspectLoader<C> {
    /// The container holding aspects and receiving loaded items.
    container: C,

    /// Source of annotations for annotation-kind extensions.
    reader: Arc<dyn AnnotationReader>,

    /// Extensions by the point kind they target, in registration order.
    extensions: HashMap<PointKind, Vec<Arc<dyn AspectLoaderExtension>>>,

    /// Resources scanned by the last successful incremental pass.
    loaded_resources: BTreeSet<PathBuf>,
}

impl<C> AspectLoader<C>
where
    C: AspectContainer,
{
    /// Create a loader without extensions.
    pub fn new(container: C, reader: Arc<dyn AnnotationReader>) -> Self {
        Self {
            container,
            reader,
            extensions: HashMap::new(),
            loaded_resources: BTreeSet::new(),
        }
    }

    /// Create a loader with the advice annotation and introduction
    /// extensions registered.
    pub fn with_default_extensions(container: C, reader: Arc<dyn AnnotationReader>) -> Self {
        let mut loader = Self::new(container, reader);
        loader.register_extension(Arc::new(AdviceAnnotationExtension::new()));
        loader.register_extension(Arc::new(DeclareParentsExtension::new()));
        loader
    }

    /// The container this loader feeds.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Resources scanned by the last successful incremental pass.
    pub fn loaded_resources(&self) -> &BTreeSet<PathBuf> {
        &self.loaded_resources
    }

    /// Register a loader extension for every point kind it targets.
    pub fn register_extension(&mut self, extension: Arc<dyn AspectLoaderExtension>) {
        let targets = extension.targets();
        for kind in [PointKind::Class, PointKind::Method, PointKind::Property] {
            if targets.contains(LoaderTarget::of(kind)) {
                self.extensions
                    .entry(kind)
                    .or_default()
                    .push(extension.clone());
            }
        }
    }

    /// Load the pointcuts and advisors an aspect defines.
    ///
    /// Runs class extensions over the aspect class, then method extensions
    /// over each method and property extensions over each property. On ID
    /// collision the earlier item is kept.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadedItems)` - The items in production order.
    /// * `Err` - If an extension or the annotation reader failed.
    pub fn load(&self, aspect: &Aspect) -> Result<LoadedItems> {
        let class = aspect.class();
        let mut items = LoadedItems::new();

        if let Some(extensions) = self.targeting(PointKind::Class) {
            items.merge(self.load_from(aspect, ReflectionPoint::Class(class), extensions)?);
        }

        if let Some(extensions) = self.targeting(PointKind::Method) {
            for method in &class.methods {
                items.merge(self.load_from(aspect, ReflectionPoint::Method(method), extensions)?);
            }
        }

        if let Some(extensions) = self.targeting(PointKind::Property) {
            for property in &class.properties {
                items.merge(self.load_from(
                    aspect,
                    ReflectionPoint::Property(property),
                    extensions,
                )?);
            }
        }

        debug!(aspect = aspect.id(), items = items.len(), "Loaded aspect");
        Ok(items)
    }

    /// Load an aspect and register everything it defines.
    ///
    /// Does not touch resource tracking.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of registered items.
    /// * `Err` - If loading failed; nothing is registered then.
    pub fn load_and_register(&self, aspect: &Aspect) -> Result<usize> {
        let items = self.load(aspect)?;
        Ok(self.register(items))
    }

    /// Load and register aspects defined in resources not scanned yet.
    ///
    /// Returns immediately when the container reports no new resources. On
    /// failure nothing is registered and the resources stay unscanned, so the
    /// pass can be retried.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of registered items.
    /// * `Err` - If loading any affected aspect failed.
    pub fn load_and_register_changed(&mut self) -> Result<usize> {
        let container_resources = self.container.resources();
        let resources_to_load: BTreeSet<PathBuf> = container_resources
            .difference(&self.loaded_resources)
            .cloned()
            .collect();

        if resources_to_load.is_empty() {
            trace!("No changed aspect resources");
            return Ok(0);
        }

        let mut items = LoadedItems::new();
        for (_, entry) in self.container.get_by_tag(ASPECT_TAG) {
            let ContainerEntry::Aspect(aspect) = entry else {
                continue;
            };
            if resources_to_load.contains(aspect.file()) {
                items.merge(self.load(&aspect)?);
            }
        }

        let registered = self.register(items);
        self.loaded_resources = container_resources;

        info!(
            resources = resources_to_load.len(),
            registered, "Loaded changed aspect resources"
        );
        Ok(registered)
    }

    /// Get an advisor, loading its aspect first if it is not registered yet.
    ///
    /// The owning aspect is the part of `id` before `->`.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<Advisor>)` - The advisor.
    /// * `Err` - `AdvisorNotFound` if the aspect does not define it,
    ///   `AspectNotFound` if the owning aspect is unknown, or a loading error.
    pub fn get_or_load_advisor(&self, id: &str) -> Result<Arc<Advisor>> {
        if let Some(advisor) = self.container.find_advisor(id) {
            return Ok(advisor);
        }

        let (aspect_id, _) = split_member_id(id)
            .ok_or_else(|| ContainerError::AdvisorNotFound(id.to_string()))?;
        let aspect = self.container.get_aspect(aspect_id)?;

        debug!(advisor = id, aspect = aspect_id, "Loading aspect on demand");
        self.load_and_register(&aspect)?;
        self.container.get_advisor(id)
    }

    fn targeting(&self, kind: PointKind) -> Option<&[Arc<dyn AspectLoaderExtension>]> {
        self.extensions
            .get(&kind)
            .map(Vec::as_slice)
            .filter(|extensions| !extensions.is_empty())
    }

    fn load_from(
        &self,
        aspect: &Aspect,
        point: ReflectionPoint<'_>,
        extensions: &[Arc<dyn AspectLoaderExtension>],
    ) -> Result<LoadedItems> {
        let mut items = LoadedItems::new();

        for extension in extensions {
            match extension.kind() {
                LoaderKind::Reflection => {
                    if extension.supports(aspect, point, None) {
                        items.merge(extension.load(aspect, point, None)?);
                    }
                }
                LoaderKind::Annotation => {
                    for annotation in self.reader.annotations(point)? {
                        if extension.supports(aspect, point, Some(&annotation)) {
                            items.merge(extension.load(aspect, point, Some(&annotation))?);
                        }
                    }
                }
            }
        }

        Ok(items)
    }

    fn register(&self, items: LoadedItems) -> usize {
        let mut registered = 0;
        for (id, item) in items {
            match item {
                LoadedItem::Pointcut(pointcut) => self.container.register_pointcut(pointcut, &id),
                LoadedItem::Advisor(advisor) => self.container.register_advisor(advisor, &id),
            }
            registered += 1;
        }
        registered
    }
}
