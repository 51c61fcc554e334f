//! Annotation pointcut.

use weave_core::{ReflectedClass, ReflectionPoint};

use crate::model::{Pointcut, PointcutKind};

/// Selects points carrying an annotation of a given type.
#[derive(Debug, Clone)]
pub struct AnnotationPointcut {
    kind: PointcutKind,
    annotation: String,
}

impl AnnotationPointcut {
    /// Select points of `kind` annotated with `annotation`.
    pub fn new(kind: PointcutKind, annotation: impl Into<String>) -> Self {
        Self {
            kind,
            annotation: annotation.into(),
        }
    }
}

impl Pointcut for AnnotationPointcut {
    fn kind(&self) -> PointcutKind {
        self.kind
    }

    fn matches_class(&self, _class: &ReflectedClass) -> bool {
        true
    }

    fn matches(&self, _class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        self.kind.accepts(point.kind())
            && point.annotations().iter().any(|a| a.is(&self.annotation))
    }
}
