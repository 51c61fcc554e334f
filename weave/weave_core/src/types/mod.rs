//! Core data types.
//!
//! This module defines the read-only reflected code model the engine loads
//! aspects from and matches advisors against.

pub mod annotation;
pub mod reflection;

pub use annotation::Annotation;
pub use reflection::{
    PointKind, ReflectedClass, ReflectedMethod, ReflectedProperty, ReflectionPoint, Visibility,
};
