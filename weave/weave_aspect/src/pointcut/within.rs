//! Class-scoped pointcut.

use weave_core::{PointKind, ReflectedClass, ReflectionPoint};

use super::pattern::NamePattern;
use crate::model::{Pointcut, PointcutKind};

/// Selects every member of classes whose name matches a pattern, optionally
/// restricted to classes extending or implementing a given type.
#[derive(Debug, Clone)]
pub struct WithinPointcut {
    class: NamePattern,
    subtype_of: Option<String>,
}

impl WithinPointcut {
    /// Select members of classes matching `class`.
    pub fn new(class: NamePattern) -> Self {
        Self {
            class,
            subtype_of: None,
        }
    }

    /// Additionally require the class to extend or implement `type_name`.
    pub fn subtype_of(mut self, type_name: impl Into<String>) -> Self {
        self.subtype_of = Some(type_name.into());
        self
    }
}

impl Pointcut for WithinPointcut {
    fn kind(&self) -> PointcutKind {
        PointcutKind::MEMBER
    }

    fn matches_class(&self, class: &ReflectedClass) -> bool {
        if !self.class.matches(&class.name) {
            return false;
        }
        match &self.subtype_of {
            Some(type_name) => class.is_subtype_of(type_name),
            None => true,
        }
    }

    fn matches(&self, class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        point.kind() != PointKind::Class && self.matches_class(class)
    }
}
