//! Advisor inspection.

use serde::Serialize;
use tracing::debug;

use weave_core::error::Result;
use weave_core::{ReflectedClass, SourceFilter};

use crate::container::AspectContainer;
use crate::loader::AspectLoader;
use crate::matcher::AdviceMatcher;
use crate::model::AdviceKind;

/// A join point an advisor applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinPointMatch {
    /// Kind of the advice applied
    pub kind: AdviceKind,
    /// Join point name, `<ClassName>-><member>` or `<ClassName>`
    pub join_point: String,
}

/// Reports where advisors apply across a set of classes.
pub struct AdvisorInspector<'a, C> {
    loader: &'a AspectLoader<C>,
    matcher: AdviceMatcher,
}

impl<'a, C> AdvisorInspector<'a, C>
where
    C: AspectContainer,
{
    /// Create an inspector loading advisors through `loader`.
    pub fn new(loader: &'a AspectLoader<C>) -> Self {
        Self {
            loader,
            matcher: AdviceMatcher::new(),
        }
    }

    /// IDs of the registered advisors, in registration order.
    pub fn advisor_ids(&self) -> Vec<String> {
        self.loader
            .container()
            .advisors()
            .iter()
            .map(|advisor| advisor.id().to_string())
            .collect()
    }

    /// Find the join points of `classes` the advisor applies to.
    ///
    /// The advisor's aspect is loaded on demand if the advisor is not
    /// registered yet.
    pub fn matching_join_points(
        &self,
        advisor_id: &str,
        classes: &[ReflectedClass],
    ) -> Result<Vec<JoinPointMatch>> {
        let advisor = self.loader.get_or_load_advisor(advisor_id)?;
        let advisors = [advisor];

        let mut matches = Vec::new();
        for class in classes {
            let advice = self.matcher.applicable_advice(class, &advisors);
            matches.extend(advice.iter().map(|(kind, join_point, _)| JoinPointMatch {
                kind,
                join_point: join_point.to_string(),
            }));
        }

        debug!(advisor = advisor_id, matches = matches.len(), "Inspected advisor");
        Ok(matches)
    }

    /// Like `matching_join_points`, skipping classes whose file `filter`
    /// rejects.
    pub fn matching_join_points_in(
        &self,
        advisor_id: &str,
        classes: &[ReflectedClass],
        filter: &SourceFilter,
    ) -> Result<Vec<JoinPointMatch>> {
        let selected: Vec<ReflectedClass> = classes
            .iter()
            .filter(|class| filter.accepts(class.file()))
            .cloned()
            .collect();
        self.matching_join_points(advisor_id, &selected)
    }
}
