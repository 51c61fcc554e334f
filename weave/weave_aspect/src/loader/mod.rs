//! Aspect loading.
//!
//! Loader extensions turn the members and annotations of an aspect into
//! pointcuts and advisors; the `AspectLoader` runs them over aspects and
//! registers what they produce.

mod aspect_loader;
mod declare_parents;
mod extension;
mod general;

pub use aspect_loader::AspectLoader;
pub use declare_parents::DeclareParentsExtension;
pub use extension::{AspectLoaderExtension, LoaderKind, LoaderTarget};
pub use general::AdviceAnnotationExtension;
