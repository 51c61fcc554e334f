//! # Weave Aspect
//!
//! `weave_aspect` loads aspects into pointcuts and advisors and decides which
//! advice applies to the join points of a class.
//!
//! ## Core Concepts
//!
//! 1. **Aspects**: Classes bundling cross-cutting behavior. An aspect is
//!    identified by its class name and registered in an `AspectContainer`.
//!
//! 2. **Loader Extensions**: Plug-ins that turn an aspect member into
//!    pointcuts and advisors. Reflection-kind extensions inspect the member
//!    directly; annotation-kind extensions are driven by its annotations.
//!
//! 3. **Pointcuts and Advisors**: A pointcut is a predicate over classes and
//!    members. An advisor pairs a pointcut with advice to run at matching
//!    join points.
//!
//! 4. **Advice Matching**: `AdviceMatcher` evaluates advisors against a
//!    class and reports, per advice kind, the advisors applying to each join
//!    point.
//!
//! ## Crate Structure
//!
//! - **container**: Registry of aspects, pointcuts, advisors and resources
//! - **loader**: Aspect loader and the built-in loader extensions
//! - **matcher**: Advice matching
//! - **model**: Aspects, advisors, advice and the pointcut seam
//! - **pointcut**: Built-in pointcuts and their declarative form
//! - **inspect**: Read-only views for tooling

pub mod container;
pub mod inspect;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod pointcut;

pub use container::{AspectContainer, ContainerEntry, InMemoryAspectContainer};
pub use inspect::{AdvisorInspector, AspectInspector};
pub use loader::{AspectLoader, AspectLoaderExtension, LoaderKind, LoaderTarget};
pub use matcher::{AdviceMap, AdviceMatcher};
pub use model::{Advice, AdviceKind, Advisor, Aspect, LoadedItem, LoadedItems, Pointcut, PointcutKind};
pub use pointcut::PointcutSpec;
