//! Annotation reader interface.
//!
//! Annotation-driven loader extensions receive annotations through this
//! trait instead of reading them straight off the reflection data, so a host
//! can plug in its own metadata source (a doc-comment parser, an attribute
//! cache, ...).

use crate::error::Result;
use crate::types::{Annotation, ReflectedClass, ReflectedMethod, ReflectedProperty, ReflectionPoint};

/// Reads the annotations attached to a reflection point.
///
/// Readers return annotations in declaration order. A reader that does not
/// handle some point kind fails with `ReflectionError::UnsupportedPoint`.
pub trait AnnotationReader: Send + Sync {
    /// Get the class-level annotations of `class`.
    fn class_annotations(&self, class: &ReflectedClass) -> Result<Vec<Annotation>>;

    /// Get the annotations of `method`.
    fn method_annotations(&self, method: &ReflectedMethod) -> Result<Vec<Annotation>>;

    /// Get the annotations of `property`.
    fn property_annotations(&self, property: &ReflectedProperty) -> Result<Vec<Annotation>>;

    /// Get the annotations of any reflection point.
    fn annotations(&self, point: ReflectionPoint<'_>) -> Result<Vec<Annotation>> {
        match point {
            ReflectionPoint::Class(class) => self.class_annotations(class),
            ReflectionPoint::Method(method) => self.method_annotations(method),
            ReflectionPoint::Property(property) => self.property_annotations(property),
        }
    }
}

/// Annotation reader returning the annotations already attached to the
/// reflection data.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachedAnnotationReader;

impl AnnotationReader for AttachedAnnotationReader {
    fn class_annotations(&self, class: &ReflectedClass) -> Result<Vec<Annotation>> {
        Ok(class.annotations.clone())
    }

    fn method_annotations(&self, method: &ReflectedMethod) -> Result<Vec<Annotation>> {
        Ok(method.annotations.clone())
    }

    fn property_annotations(&self, property: &ReflectedProperty) -> Result<Vec<Annotation>> {
        Ok(property.annotations.clone())
    }
}
