//! Concrete pointcuts.
//!
//! The engine does not define a textual pointcut language. Pointcuts are
//! built from the predicates in this module, either directly or from a
//! `PointcutSpec` carried in annotation arguments.

mod annotation;
mod introduction;
mod logic;
mod pattern;
mod signature;
mod spec;
mod within;

pub use annotation::AnnotationPointcut;
pub use introduction::IntroductionPointcut;
pub use logic::{AndPointcut, NotPointcut, OrPointcut};
pub use pattern::NamePattern;
pub use signature::SignaturePointcut;
pub use spec::{MemberSpec, PointcutSpec};
pub use within::WithinPointcut;
