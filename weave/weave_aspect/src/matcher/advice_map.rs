//! Applicable advice of one class.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{AdviceKind, Advisor};

/// Advisors applicable to a class, by advice kind and join point.
///
/// Kinds and join points are kept in sorted order. The advisors of one join
/// point keep the order they were added in, which is the execution order of
/// stacked advice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceMap {
    advice: BTreeMap<AdviceKind, BTreeMap<String, Vec<Arc<Advisor>>>>,
}

impl AdviceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an advisor to a join point.
    pub fn push(&mut self, kind: AdviceKind, join_point: impl Into<String>, advisor: Arc<Advisor>) {
        self.advice
            .entry(kind)
            .or_default()
            .entry(join_point.into())
            .or_default()
            .push(advisor);
    }

    /// Get the advisors of a join point.
    pub fn get(&self, kind: AdviceKind, join_point: &str) -> Option<&[Arc<Advisor>]> {
        self.advice
            .get(&kind)
            .and_then(|points| points.get(join_point))
            .map(Vec::as_slice)
    }

    /// The advice kinds present.
    pub fn kinds(&self) -> impl Iterator<Item = AdviceKind> + '_ {
        self.advice.keys().copied()
    }

    /// The join points advised with `kind`.
    pub fn join_points(&self, kind: AdviceKind) -> impl Iterator<Item = &str> {
        self.advice
            .get(&kind)
            .into_iter()
            .flat_map(|points| points.keys().map(String::as_str))
    }

    /// Whether no advice applies.
    pub fn is_empty(&self) -> bool {
        self.advice.is_empty()
    }

    /// Number of advised (kind, join point) pairs.
    pub fn len(&self) -> usize {
        self.advice.values().map(BTreeMap::len).sum()
    }

    /// Iterate over every (kind, join point, advisors) entry.
    pub fn iter(&self) -> impl Iterator<Item = (AdviceKind, &str, &[Arc<Advisor>])> {
        self.advice.iter().flat_map(|(kind, points)| {
            points
                .iter()
                .map(move |(point, advisors)| (*kind, point.as_str(), advisors.as_slice()))
        })
    }

    /// The map with advisors replaced by their IDs.
    ///
    /// This is the form a weaving plan is cached in.
    pub fn advisor_ids(&self) -> BTreeMap<AdviceKind, BTreeMap<String, Vec<String>>> {
        self.advice
            .iter()
            .map(|(kind, points)| {
                let points = points
                    .iter()
                    .map(|(point, advisors)| {
                        let ids = advisors.iter().map(|a| a.id().to_string()).collect();
                        (point.clone(), ids)
                    })
                    .collect();
                (*kind, points)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Advice;
    use crate::pointcut::{NamePattern, SignaturePointcut};

    fn advisor(id: &str, kind: AdviceKind) -> Arc<Advisor> {
        Arc::new(Advisor::new(
            id,
            Arc::new(SignaturePointcut::methods(NamePattern::any())),
            Advice::new(kind, id),
        ))
    }

    #[test]
    fn test_push_keeps_advisor_order() {
        let mut map = AdviceMap::new();
        map.push(AdviceKind::Before, "Order->save", advisor("B->b", AdviceKind::Before));
        map.push(AdviceKind::Before, "Order->save", advisor("A->a", AdviceKind::Before));
        map.push(AdviceKind::Around, "Order->id", advisor("C->c", AdviceKind::Around));

        let ids: Vec<_> = map
            .get(AdviceKind::Before, "Order->save")
            .unwrap()
            .iter()
            .map(|a| a.id())
            .collect();
        assert_eq!(ids, vec!["B->b", "A->a"]);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.kinds().collect::<Vec<_>>(),
            vec![AdviceKind::Before, AdviceKind::Around]
        );
        assert_eq!(map.join_points(AdviceKind::Around).collect::<Vec<_>>(), vec!["Order->id"]);
        assert!(map.get(AdviceKind::After, "Order->save").is_none());
    }

    #[test]
    fn test_advisor_ids_serialize() {
        let mut map = AdviceMap::new();
        map.push(AdviceKind::Around, "Order->save", advisor("Logging->log", AdviceKind::Around));

        let plan = serde_json::to_value(map.advisor_ids()).unwrap();
        assert_eq!(plan, serde_json::json!({ "around": { "Order->save": ["Logging->log"] } }));
    }
}
