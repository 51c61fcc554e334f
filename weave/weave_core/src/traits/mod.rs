//! Seams to external subsystems.

pub mod annotation_reader;

pub use annotation_reader::{AnnotationReader, AttachedAnnotationReader};
