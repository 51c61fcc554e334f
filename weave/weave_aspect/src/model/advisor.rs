//! Advisor model.

use std::fmt;
use std::sync::Arc;

use super::advice::{Advice, AdviceKind};
use super::pointcut::Pointcut;

/// A pointcut bound to a piece of advice.
#[derive(Clone)]
pub struct Advisor {
    id: String,
    pointcut: Arc<dyn Pointcut>,
    advice: Advice,
}

impl Advisor {
    /// Create a new advisor.
    pub fn new(id: impl Into<String>, pointcut: Arc<dyn Pointcut>, advice: Advice) -> Self {
        Self {
            id: id.into(),
            pointcut,
            advice,
        }
    }

    /// The advisor ID, `<aspect>-><member>` by convention.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The pointcut selecting join points.
    pub fn pointcut(&self) -> &dyn Pointcut {
        self.pointcut.as_ref()
    }

    /// The advice applied at selected join points.
    pub fn advice(&self) -> &Advice {
        &self.advice
    }

    /// Shortcut for the advice kind.
    pub fn kind(&self) -> AdviceKind {
        self.advice.kind
    }
}

impl fmt::Debug for Advisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Advisor")
            .field("id", &self.id)
            .field("advice", &self.advice)
            .field("pointcut", &self.pointcut)
            .finish()
    }
}

// Pointcuts are opaque predicates; two advisors are the same when their
// identity and advice agree.
impl PartialEq for Advisor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.advice == other.advice
    }
}

impl Eq for Advisor {}
