//! Advice annotation extension.
//!
//! Turns annotated aspect methods into advisors and named pointcuts:
//!
//! - `Before`, `After`, `AfterThrowing` and `Around` produce an advisor
//!   whose advice is implemented by the annotated method;
//! - `Pointcut` produces a named pointcut.
//!
//! Both read the pointcut definition from the `pointcut` argument and are
//! registered under `<aspect>-><method>`.

use weave_core::error::{LoaderError, Result};
use weave_core::id::member_id;
use weave_core::{Annotation, ReflectionPoint};

use super::extension::{AspectLoaderExtension, LoaderKind, LoaderTarget};
use crate::model::{Advice, AdviceKind, Advisor, Aspect, LoadedItems};
use crate::pointcut::PointcutSpec;

/// Annotation naming a reusable pointcut.
pub const POINTCUT_ANNOTATION: &str = "Pointcut";

/// Reads advice and pointcut annotations on aspect methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceAnnotationExtension;

impl AdviceAnnotationExtension {
    /// Create the extension.
    pub fn new() -> Self {
        Self
    }

    fn handles(annotation: &Annotation) -> bool {
        annotation.is(POINTCUT_ANNOTATION) || AdviceKind::from_annotation(&annotation.name).is_some()
    }
}

fn pointcut_spec(annotation: &Annotation) -> Result<PointcutSpec> {
    let raw = annotation.arg("pointcut").ok_or_else(|| {
        LoaderError::Configuration(format!("{} requires a 'pointcut' argument", annotation))
    })?;

    serde_json::from_value(raw.clone()).map_err(|e| {
        LoaderError::Configuration(format!("malformed pointcut in {}: {}", annotation, e)).into()
    })
}

impl AspectLoaderExtension for AdviceAnnotationExtension {
    fn targets(&self) -> LoaderTarget {
        LoaderTarget::METHOD
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
        matches!(point, ReflectionPoint::Method(_)) && annotation.is_some_and(Self::handles)
    }

    fn load(
        &self,
        aspect: &Aspect,
        point: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> Result<LoadedItems> {
        let ReflectionPoint::Method(method) = point else {
            return Err(LoaderError::Configuration(format!(
                "advice annotations apply to methods, not to {} '{}' of aspect {}",
                point.kind(),
                point.name(),
                aspect.id()
            ))
            .into());
        };
        let annotation = annotation.ok_or_else(|| {
            LoaderError::Configuration(format!(
                "no annotation given for {}",
                member_id(aspect.id(), &method.name)
            ))
        })?;

        let id = member_id(aspect.id(), &method.name);
        let pointcut = pointcut_spec(annotation)?.build()?;

        let mut items = LoadedItems::new();
        if annotation.is(POINTCUT_ANNOTATION) {
            items.insert_pointcut(id, pointcut);
            return Ok(items);
        }

        let kind = AdviceKind::from_annotation(&annotation.name).ok_or_else(|| {
            LoaderError::Configuration(format!("{} is not an advice annotation", annotation))
        })?;
        items.insert_advisor(Advisor::new(id.clone(), pointcut, Advice::new(kind, id)));

        Ok(items)
    }
}
