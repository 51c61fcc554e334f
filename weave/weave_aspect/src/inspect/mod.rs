//! Inspection of loaded aspects and advisors.
//!
//! These are read-only views over the container, meant for tooling that
//! reports what the engine knows about.

mod advisor;
mod aspect;

pub use advisor::{AdvisorInspector, JoinPointMatch};
pub use aspect::{pretty_doc_text, AspectDescription, AspectInspector, AspectSummary};
