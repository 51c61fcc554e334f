//! Pointcut model.
//!
//! A pointcut is a predicate selecting join points. It is evaluated in two
//! steps: first against a class as a whole, then against each member of a
//! class that passed the first step.

use bitflags::bitflags;
use std::fmt;

use weave_core::{PointKind, ReflectedClass, ReflectionPoint};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Which join points a pointcut can select.
    pub struct PointcutKind: u8 {
        /// Methods of a class.
        const METHOD = 0b0000_0001;
        /// Properties of a class.
        const PROPERTY = 0b0000_0010;
        /// The class itself, for introductions.
        const INTRODUCTION = 0b0000_0100;
        /// Methods and properties.
        const MEMBER = Self::METHOD.bits() | Self::PROPERTY.bits();
    }
}

impl PointcutKind {
    /// Check whether a pointcut of this kind can select a point of `kind`.
    pub fn accepts(&self, kind: PointKind) -> bool {
        match kind {
            PointKind::Class => self.contains(Self::INTRODUCTION),
            PointKind::Method => self.contains(Self::METHOD),
            PointKind::Property => self.contains(Self::PROPERTY),
        }
    }
}

/// A predicate over join points.
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait Pointcut: fmt::Debug + Send + Sync {
    /// The join point kinds this pointcut can select.
    fn kind(&self) -> PointcutKind;

    /// Check whether members of `class` can be selected at all.
    fn matches_class(&self, class: &ReflectedClass) -> bool;

    /// Check whether `point` of `class` is selected.
    ///
    /// For introductions `point` is the class itself.
    fn matches(&self, class: &ReflectedClass, point: ReflectionPoint<'_>) -> bool;
}
