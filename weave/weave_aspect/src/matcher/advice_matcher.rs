//! Advice matcher.

use std::sync::Arc;

use tracing::trace;

use weave_core::id::member_id;
use weave_core::{ReflectedClass, ReflectionPoint};

use super::advice_map::AdviceMap;
use crate::model::{Advisor, PointcutKind};

/// Evaluates advisors against classes.
///
/// Matching is pure: it only reads the class and the advisors, never fails,
/// and returns equal maps for equal inputs. A panicking pointcut is a bug in
/// the pointcut and is not caught.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceMatcher;

impl AdviceMatcher {
    /// Create a new advice matcher.
    pub fn new() -> Self {
        Self
    }

    /// Get the advice applicable to `class`.
    ///
    /// Each advisor's pointcut is first checked against the class as a
    /// whole; if it passes, every method and property the pointcut kind
    /// covers is tested on its own. Member join points are named
    /// `<ClassName>-><memberName>`; introductions are reported at the
    /// class name. Advisors matching the same join point appear in the order
    /// of `advisors`.
    ///
    /// # Arguments
    ///
    /// * `class` - The class to weave.
    /// * `advisors` - Candidate advisors, in registration order.
    ///
    /// # Returns
    ///
    /// The applicable advice; empty if nothing matches.
    pub fn applicable_advice(&self, class: &ReflectedClass, advisors: &[Arc<Advisor>]) -> AdviceMap {
        let mut advice = AdviceMap::new();

        for advisor in advisors {
            let pointcut = advisor.pointcut();
            if !pointcut.matches_class(class) {
                continue;
            }

            let kind = pointcut.kind();

            if kind.contains(PointcutKind::INTRODUCTION)
                && pointcut.matches(class, ReflectionPoint::Class(class))
            {
                advice.push(advisor.kind(), class.name.clone(), advisor.clone());
            }

            if kind.contains(PointcutKind::METHOD) {
                for method in &class.methods {
                    if pointcut.matches(class, ReflectionPoint::Method(method)) {
                        advice.push(
                            advisor.kind(),
                            member_id(&class.name, &method.name),
                            advisor.clone(),
                        );
                    }
                }
            }

            if kind.contains(PointcutKind::PROPERTY) {
                for property in &class.properties {
                    if pointcut.matches(class, ReflectionPoint::Property(property)) {
                        advice.push(
                            advisor.kind(),
                            member_id(&class.name, &property.name),
                            advisor.clone(),
                        );
                    }
                }
            }
        }

        trace!(
            class = %class.name,
            advisors = advisors.len(),
            join_points = advice.len(),
            "Matched advisors"
        );
        advice
    }
}
