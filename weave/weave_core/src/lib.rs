//! # Weave Core
//!
//! `weave_core` provides the foundations shared by every part of the Weave
//! aspect engine: the error hierarchy, identifier conventions, the read-only
//! reflected code model that aspects are loaded from and matched against, and
//! configuration and logging utilities.
//!
//! ## Core Concepts
//!
//! 1. **Reflected Code Model**: Classes, methods and properties are described
//!    by plain data (`ReflectedClass`, `ReflectedMethod`, `ReflectedProperty`)
//!    produced by an external reflection subsystem. The engine only reads it.
//!
//! 2. **Annotations**: Structured metadata attached to a reflection point.
//!    Annotations are read through the `AnnotationReader` seam so hosts can
//!    plug in their own metadata source.
//!
//! 3. **Identifiers**: Aspects are identified by the fully-qualified name of
//!    their defining class; pointcuts and advisors declared on an aspect
//!    member use `<aspect>-><member>`, and join points use
//!    `<ClassName>-><memberName>`.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all Weave components
//! - **id**: Identifier conventions
//! - **types**: The reflected code model
//! - **traits**: Seams to external subsystems
//! - **utils**: Configuration and logging helpers

pub mod error;
pub mod id;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use traits::{AnnotationReader, AttachedAnnotationReader};
pub use types::{
    Annotation, PointKind, ReflectedClass, ReflectedMethod, ReflectedProperty, ReflectionPoint,
    Visibility,
};
pub use utils::{LogLevel, SourceFilter, WeaverConfig};
