//! Structured pointcut definitions.
//!
//! `PointcutSpec` is the already-parsed, data form of a pointcut as it
//! travels inside annotation arguments. For example, public methods
//! returning `void`:
//!
//! ```json
//! { "method": { "visibility": "public", "type": "void" } }
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use weave_core::error::{LoaderError, Result};
use weave_core::{PointKind, Visibility};

use super::{
    AndPointcut, AnnotationPointcut, IntroductionPointcut, NamePattern, NotPointcut, OrPointcut,
    SignaturePointcut, WithinPointcut,
};
use crate::model::{Pointcut, PointcutKind};

/// A pointcut definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointcutSpec {
    /// Methods by signature.
    Method(MemberSpec),

    /// Properties by signature.
    Property(MemberSpec),

    /// Points carrying an annotation.
    Annotated {
        /// Annotation type name.
        annotation: String,

        /// Which points to consider.
        #[serde(default = "default_target")]
        target: PointKind,
    },

    /// All members of matching classes.
    Within {
        /// Class name pattern.
        class: String,

        /// Type the class must extend or implement.
        #[serde(default)]
        subtype_of: Option<String>,
    },

    /// Matching classes as a whole.
    Introduction {
        /// Class name pattern.
        class: String,
    },

    /// Every inner definition must match.
    All(Vec<PointcutSpec>),

    /// At least one inner definition must match.
    Any(Vec<PointcutSpec>),

    /// The inner definition must not match.
    Not(Box<PointcutSpec>),
}

/// Signature criteria for methods and properties. Unset criteria match
/// anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSpec {
    /// Member name pattern.
    pub name: Option<String>,

    /// Required visibility.
    pub visibility: Option<Visibility>,

    /// Required static-ness.
    pub is_static: Option<bool>,

    /// Return type (methods) or declared type (properties) pattern.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

fn default_target() -> PointKind {
    PointKind::Method
}

impl PointcutSpec {
    /// Build the pointcut this definition describes.
    ///
    /// Fails with a configuration error on malformed patterns or empty
    /// combinations.
    pub fn build(&self) -> Result<Arc<dyn Pointcut>> {
        let pointcut: Arc<dyn Pointcut> = match self {
            Self::Method(member) => Arc::new(member.build(SignaturePointcut::methods)?),
            Self::Property(member) => Arc::new(member.build(SignaturePointcut::properties)?),
            Self::Annotated { annotation, target } => {
                let kind = match target {
                    PointKind::Class => PointcutKind::INTRODUCTION,
                    PointKind::Method => PointcutKind::METHOD,
                    PointKind::Property => PointcutKind::PROPERTY,
                };
                Arc::new(AnnotationPointcut::new(kind, annotation.clone()))
            }
            Self::Within { class, subtype_of } => {
                let mut within = WithinPointcut::new(NamePattern::new(class)?);
                if let Some(type_name) = subtype_of {
                    within = within.subtype_of(type_name.clone());
                }
                Arc::new(within)
            }
            Self::Introduction { class } => {
                Arc::new(IntroductionPointcut::new(NamePattern::new(class)?))
            }
            Self::All(specs) => Arc::new(AndPointcut::new(Self::build_all(specs, "all")?)),
            Self::Any(specs) => Arc::new(OrPointcut::new(Self::build_all(specs, "any")?)),
            Self::Not(spec) => Arc::new(NotPointcut::new(spec.build()?)),
        };

        Ok(pointcut)
    }

    fn build_all(specs: &[PointcutSpec], combinator: &str) -> Result<Vec<Arc<dyn Pointcut>>> {
        if specs.is_empty() {
            return Err(LoaderError::Configuration(format!(
                "'{}' needs at least one pointcut",
                combinator
            ))
            .into());
        }
        specs.iter().map(PointcutSpec::build).collect()
    }
}

impl MemberSpec {
    fn build(&self, make: fn(NamePattern) -> SignaturePointcut) -> Result<SignaturePointcut> {
        let name = match &self.name {
            Some(pattern) => NamePattern::new(pattern)?,
            None => NamePattern::any(),
        };

        let mut pointcut = make(name);
        if let Some(visibility) = self.visibility {
            pointcut = pointcut.with_visibility(visibility);
        }
        if let Some(is_static) = self.is_static {
            pointcut = pointcut.with_static(is_static);
        }
        if let Some(type_name) = &self.type_name {
            pointcut = pointcut.with_type(NamePattern::new(type_name)?);
        }

        Ok(pointcut)
    }
}
