//! Logical combinations of pointcuts.

use std::sync::Arc;

use weave_core::{ReflectedClass, ReflectionPoint};

use crate::model::{Pointcut, PointcutKind};

/// Selects points selected by every inner pointcut.
#[derive(Debug, Clone)]
pub struct AndPointcut {
    pointcuts: Vec<Arc<dyn Pointcut>>,
    kind: PointcutKind,
}

impl AndPointcut {
    /// Combine `pointcuts`. An empty conjunction selects nothing.
    pub fn new(pointcuts: Vec<Arc<dyn Pointcut>>) -> Self {
        let kind = pointcuts
            .iter()
            .map(|p| p.kind())
            .reduce(|a, b| a & b)
            .unwrap_or_else(PointcutKind::empty);
        Self { pointcuts, kind }
    }
}

impl Pointcut for AndPointcut {
    fn kind(&self) -> PointcutKind {
        self.kind
    }

    fn matches_class(&self, class: &ReflectedClass) -> bool {
        !self.pointcuts.is_empty() && self.pointcuts.iter().all(|p| p.matches_class(class))
    }

    fn matches(&self, class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        self.kind.accepts(point.kind())
            && self
                .pointcuts
                .iter()
                .all(|p| p.matches_class(class) && p.matches(class, point))
    }
}

/// Selects points selected by any inner pointcut.
#[derive(Debug, Clone)]
pub struct OrPointcut {
    pointcuts: Vec<Arc<dyn Pointcut>>,
    kind: PointcutKind,
}

impl OrPointcut {
    /// Combine `pointcuts`. An empty disjunction selects nothing.
    pub fn new(pointcuts: Vec<Arc<dyn Pointcut>>) -> Self {
        let kind = pointcuts
            .iter()
            .fold(PointcutKind::empty(), |kind, p| kind | p.kind());
        Self { pointcuts, kind }
    }
}

impl Pointcut for OrPointcut {
    fn kind(&self) -> PointcutKind {
        self.kind
    }

    fn matches_class(&self, class: &ReflectedClass) -> bool {
        self.pointcuts.iter().any(|p| p.matches_class(class))
    }

    fn matches(&self, class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        self.pointcuts.iter().any(|p| {
            p.kind().accepts(point.kind()) && p.matches_class(class) && p.matches(class, point)
        })
    }
}

/// Selects the points of the inner kind that the inner pointcut rejects.
#[derive(Debug, Clone)]
pub struct NotPointcut {
    pointcut: Arc<dyn Pointcut>,
}

impl NotPointcut {
    /// Negate `pointcut`.
    pub fn new(pointcut: Arc<dyn Pointcut>) -> Self {
        Self { pointcut }
    }
}

impl Pointcut for NotPointcut {
    fn kind(&self) -> PointcutKind {
        self.pointcut.kind()
    }

    // A class rejected by the inner filter has all of its members rejected,
    // which makes every member selected here.
    fn matches_class(&self, _class: &ReflectedClass) -> bool {
        true
    }

    fn matches(&self, class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool {
        self.pointcut.kind().accepts(point.kind())
            && !(self.pointcut.matches_class(class) && self.pointcut.matches(class, point))
    }
}
