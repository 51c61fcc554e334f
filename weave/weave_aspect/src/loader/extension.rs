//! Loader extension interface.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use weave_core::error::{Error, LoaderError, Result};
use weave_core::{Annotation, PointKind, ReflectionPoint};

use crate::model::{Aspect, LoadedItems};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Which parts of an aspect a loader extension reads.
    pub struct LoaderTarget: u8 {
        /// The aspect class itself.
        const CLASS = 0b0000_0001;
        /// Each method of the aspect.
        const METHOD = 0b0000_0010;
        /// Each property of the aspect.
        const PROPERTY = 0b0000_0100;
    }
}

impl LoaderTarget {
    /// The target flag for a point kind.
    pub fn of(kind: PointKind) -> Self {
        match kind {
            PointKind::Class => Self::CLASS,
            PointKind::Method => Self::METHOD,
            PointKind::Property => Self::PROPERTY,
        }
    }
}

/// What a loader extension operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    /// The reflection data of a point.
    Reflection,

    /// Each annotation attached to a point, one at a time.
    Annotation,
}

impl LoaderKind {
    /// Get the name of this loader kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflection => "reflection",
            Self::Annotation => "annotation",
        }
    }
}

impl fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoaderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reflection" => Ok(Self::Reflection),
            "annotation" => Ok(Self::Annotation),
            _ => Err(LoaderError::UnsupportedLoaderKind(s.to_string()).into()),
        }
    }
}

/// A strategy producing pointcuts and advisors from an aspect.
///
/// Extensions are stateless. `Reflection` extensions are called once per
/// targeted point with `annotation` set to `None`; `Annotation` extensions
/// are called once per annotation on the point. `load` is only called after
/// `supports` agreed for the same arguments.
pub trait AspectLoaderExtension: Send + Sync {
    /// The parts of an aspect this extension reads.
    fn targets(&self) -> LoaderTarget;

    /// What this extension operates on.
    fn kind(&self) -> LoaderKind;

    /// Check whether this extension handles the given point.
    fn supports(
        &self,
        aspect: &Aspect,
        point: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> bool;

    /// Produce pointcuts and advisors for the given point.
    ///
    /// Must not have side effects besides allocation. Fails with
    /// `LoaderError::Configuration` if the combination is structurally
    /// invalid.
    fn load(
        &self,
        aspect: &Aspect,
        point: ReflectionPoint<'_>,
        annotation: Option<&Annotation>,
    ) -> Result<LoadedItems>;
}
