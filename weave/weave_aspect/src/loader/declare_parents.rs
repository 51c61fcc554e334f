//! Introduction extension.
//!
//! A `DeclareParents` annotation on an aspect property introduces an
//! interface into every class whose name matches the `class` argument:
//!
//! ```json
//! { "name": "DeclareParents", "args": { "class": "App\\Model\\*", "interface": "Loggable" } }
//! ```

use std::sync::Arc;

use weave_core::error::{LoaderError, Result};
use weave_core::id::member_id;
use weave_core::{Annotation, ReflectionPoint};

use super::extension::{AspectLoaderExtension, LoaderKind, LoaderTarget};
use crate::model::{Advice, AdviceKind, Advisor, Aspect, LoadedItems};
use crate::pointcut::{IntroductionPointcut, NamePattern};

/// Annotation declaring an introduction.
pub const DECLARE_PARENTS_ANNOTATION: &str = "DeclareParents";

/// Reads `DeclareParents` annotations on aspect properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclareParentsExtension;

impl DeclareParentsExtension {
    /// Create the extension.
    pub fn new() -> Self {
        Self
    }
}

fn required_arg<'a>(annotation: &'a Annotation, key: &str) -> Result<&'a str> {
    annotation.str_arg(key).ok_or_else(|| {
        LoaderError::Configuration(format!("{} requires a string '{}' argument", annotation, key))
            .into()
    })
}

impl AspectLoaderExtension for DeclareParentsExtension {
    fn targets(&self) -> LoaderTarget {
        LoaderTarget::PROPERTY
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::Annotation
    }

    fn supports(
        &self,
        _aspect: &Aspect,
        point: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> bool {
        matches!(point, ReflectionPoint::Property(_))
            && annotation.is_some_and(|a| a.is(DECLARE_PARENTS_ANNOTATION))
    }

    fn load(
        &self,
        aspect: &Aspect,
        point: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> Result<LoadedItems> {
        let (ReflectionPoint::Property(property), Some(annotation)) = (point, annotation) else {
            return Err(LoaderError::Configuration(format!(
                "{} applies to annotated properties, not to {} '{}' of aspect {}",
                DECLARE_PARENTS_ANNOTATION,
                point.kind(),
                point.name(),
                aspect.id()
            ))
            .into());
        };

        let class = NamePattern::new(required_arg(annotation, "class")?)?;
        let interface = required_arg(annotation, "interface")?;
        let id = member_id(aspect.id(), &property.name);

        let mut items = LoadedItems::new();
        items.insert_advisor(Advisor::new(
            id,
            Arc::new(IntroductionPointcut::new(class)),
            Advice::new(AdviceKind::Introduction, interface),
        ));

        Ok(items)
    }
}
