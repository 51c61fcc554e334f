//! Advice model.
//!
//! Advice is the cross-cutting behavior itself. The engine treats it as an
//! opaque payload: it only needs the advice kind, which groups matches in
//! the advice map, and a reference to the code implementing it, which the
//! weaving layer resolves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use weave_core::error::{Error, LoaderError};

/// When advice runs relative to its join point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    /// Runs before the join point.
    Before,

    /// Runs after the join point returns.
    After,

    /// Runs when the join point fails.
    AfterThrowing,

    /// Wraps the join point.
    Around,

    /// Introduces an interface into the matched class.
    Introduction,
}

impl AdviceKind {
    /// Get the tag of this advice kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
            Self::AfterThrowing => "after_throwing",
            Self::Around => "around",
            Self::Introduction => "introduction",
        }
    }

    /// Map an advice annotation name onto its kind.
    pub fn from_annotation(name: &str) -> Option<Self> {
        match name {
            "Before" => Some(Self::Before),
            "After" => Some(Self::After),
            "AfterThrowing" => Some(Self::AfterThrowing),
            "Around" => Some(Self::Around),
            _ => None,
        }
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdviceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            "after_throwing" => Ok(Self::AfterThrowing),
            "around" => Ok(Self::Around),
            "introduction" => Ok(Self::Introduction),
            _ => Err(LoaderError::Configuration(format!("unknown advice kind '{}'", s)).into()),
        }
    }
}

/// A piece of advice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Advice {
    /// The advice kind.
    pub kind: AdviceKind,

    /// What implements the advice: the aspect member (`<aspect>-><member>`)
    /// for interceptors, the introduced interface for introductions.
    pub callback: String,
}

impl Advice {
    /// Create a new piece of advice.
    pub fn new(kind: AdviceKind, callback: impl Into<String>) -> Self {
        Self {
            kind,
            callback: callback.into(),
        }
    }
}
