//! Annotation model.
//!
//! Annotations are structured metadata objects attached to a class, method
//! or property. Each carries its own type name and arbitrary arguments; the
//! engine never interprets arguments itself, loader extensions do.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A structured annotation attached to a reflection point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation type name, e.g. `Around`.
    pub name: String,

    /// The annotation arguments.
    #[serde(default)]
    pub args: Value,
}

impl Annotation {
    /// Create an annotation without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Value::Null,
        }
    }

    /// Set the arguments of this annotation.
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = args;
        self
    }

    /// Check whether this annotation has the given type name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Get a named argument.
    ///
    /// Returns `None` if the arguments are not an object or the key is absent.
    pub fn arg(&self, key: &str) -> Option<&Value> {
        self.args.as_object().and_then(|args| args.get(key))
    }

    /// Get a named argument as a string.
    pub fn str_arg(&self, key: &str) -> Option<&str> {
        self.arg(key).and_then(Value::as_str)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_null() {
            write!(f, "@{}", self.name)
        } else {
            write!(f, "@{}({})", self.name, self.args)
        }
    }
}
