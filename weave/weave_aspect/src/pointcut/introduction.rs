//! Introduction pointcut.

use weave_core::{PointKind, ReflectedClass, ReflectionPoint};

use super::pattern::NamePattern;
use crate::model::{Pointcut, PointcutKind};

/// Selects whole classes by name, for introductions.
#[derive(Debug, Clone)]
pub struct IntroductionPointcut {
    class: NamePattern,
}

impl IntroductionPointcut {
    /// Select classes matching `class`.
    pub fn new(class: NamePattern) -> Self {
        Self { class }
    }
}

impl Pointcut for IntroductionPointcut {
    fn kind(&self) -> PointcutKind {
        PointcutKind::INTRODUCTION
    }

    fn matches_class(&self, class: &ReflectedClass) -> bool {
        self.class.matches(&class.name)
    }

    fn matches(&self, class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        point.kind() == PointKind::Class && self.class.matches(&class.name)
    }
}
