//! Aspect inspection.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use weave_core::error::Result;

use crate::container::AspectContainer;

static COMMENT_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*/?\*+/?").expect("comment marker pattern is valid"));

/// Short listing entry for a registered aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectSummary {
    /// The aspect ID
    pub id: String,
    /// Name of the aspect class
    pub class_name: String,
}

/// Detailed view of one aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectDescription {
    /// The aspect ID
    pub id: String,
    /// Name of the aspect class
    pub class_name: String,
    /// File defining the aspect
    pub file: PathBuf,
    /// The class doc comment without comment markers
    pub description: Option<String>,
}

/// Read-only view of the aspects in a container.
pub struct AspectInspector<'a, C> {
    container: &'a C,
}

impl<'a, C> AspectInspector<'a, C>
where
    C: AspectContainer,
{
    /// Create an inspector over `container`.
    pub fn new(container: &'a C) -> Self {
        Self { container }
    }

    /// List registered aspects, in registration order.
    pub fn aspects(&self) -> Vec<AspectSummary> {
        self.container
            .aspects()
            .iter()
            .map(|aspect| AspectSummary {
                id: aspect.id().to_string(),
                class_name: aspect.class_name().to_string(),
            })
            .collect()
    }

    /// Describe a single aspect.
    ///
    /// # Returns
    ///
    /// * `Ok(AspectDescription)` - The aspect details.
    /// * `Err` - `AspectNotFound` if `id` is not registered.
    pub fn describe(&self, id: &str) -> Result<AspectDescription> {
        let aspect = self.container.get_aspect(id)?;
        Ok(AspectDescription {
            id: aspect.id().to_string(),
            class_name: aspect.class_name().to_string(),
            file: aspect.file().to_path_buf(),
            description: aspect.class().doc_comment.as_deref().map(pretty_doc_text),
        })
    }
}

/// Strip block comment markers from a doc comment.
///
/// Leading whitespace, `/**`, `*` and `*/` at the start of each line are
/// removed, and the result is trimmed.
pub fn pretty_doc_text(comment: &str) -> String {
    COMMENT_MARKERS.replace_all(comment, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::InMemoryAspectContainer;
    use crate::model::Aspect;
    use weave_core::ReflectedClass;

    #[test]
    fn test_pretty_doc_text() {
        let comment = "/**\n * Logs every order save.\n *\n * Second line.\n */";
        assert_eq!(pretty_doc_text(comment), "Logs every order save.\n\n Second line.");
        assert_eq!(pretty_doc_text("plain"), "plain");
    }

    #[test]
    fn test_describe_aspect() {
        let container = InMemoryAspectContainer::new();
        container.register_aspect(Aspect::new(
            ReflectedClass::new("Logging", "/app/aspect/Logging.src")
                .with_doc_comment("/**\n * Logs calls.\n */"),
        ));

        let inspector = AspectInspector::new(&container);
        assert_eq!(
            inspector.aspects(),
            vec![AspectSummary {
                id: "Logging".to_string(),
                class_name: "Logging".to_string()
            }]
        );

        let description = inspector.describe("Logging").unwrap();
        assert_eq!(description.file, PathBuf::from("/app/aspect/Logging.src"));
        assert_eq!(description.description.as_deref(), Some("Logs calls."));

        let err = inspector.describe("Missing").unwrap_err();
        assert!(err.is_not_found());
    }
}
