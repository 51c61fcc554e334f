//! Glob-style name patterns.

use regex::Regex;
use std::fmt;

use weave_core::error::{LoaderError, Result};

/// A name pattern.
///
/// `*` matches any run of characters, `?` matches a single character and `|`
/// separates alternatives: `get*|set*` matches every getter and setter.
/// Everything else matches literally and the whole name must match.
#[derive(Clone)]
pub struct NamePattern {
    source: String,
    /// `None` matches every name.
    regex: Option<Regex>,
}

impl NamePattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let alternatives = pattern
            .split('|')
            .map(|alt| glob_to_regex(alt.trim()))
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&format!("^(?:{})$", alternatives)).map_err(|e| {
            LoaderError::Configuration(format!("invalid name pattern '{}': {}", pattern, e))
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex: Some(regex),
        })
    }

    /// A pattern matching every name.
    pub fn any() -> Self {
        Self {
            source: "*".to_string(),
            regex: None,
        }
    }

    /// Check whether `name` matches.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.as_ref().map_or(true, |regex| regex.is_match(name))
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() * 2);
    for c in glob.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out
}

impl fmt::Debug for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamePattern").field(&self.source).finish()
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
