//! Aspect models.
//!
//! This module defines aspects, advice, pointcuts, advisors and the items
//! loader extensions produce.

pub mod advice;
pub mod advisor;
pub mod aspect;
pub mod item;
pub mod pointcut;

pub use advice::{Advice, AdviceKind};
pub use advisor::Advisor;
pub use aspect::Aspect;
pub use item::{LoadedItem, LoadedItems};
pub use pointcut::{Pointcut, PointcutKind};
