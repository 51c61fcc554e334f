//! Configuration utilities.
//!
//! `WeaverConfig` holds the options of one weaving kernel: where the target
//! application lives, which of its files are analyzed, and how verbose the
//! engine is. It is usually read from a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::logging::LogLevel;
use crate::error::{ConfigError, Result};

/// Options of the weaving kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaverConfig {
    /// Root directory of the target application.
    pub app_dir: PathBuf,

    /// Directory holding woven output; never analyzed.
    pub cache_dir: Option<PathBuf>,

    /// When non-empty, only files under one of these paths are analyzed.
    pub include_paths: Vec<PathBuf>,

    /// Files under these paths are never analyzed.
    pub exclude_paths: Vec<PathBuf>,

    /// File extensions (without the dot) that hold source code.
    /// An empty list accepts every extension.
    pub source_extensions: Vec<String>,

    /// Minimum level of emitted log records.
    pub log_level: LogLevel,

    /// Whether the kernel runs in debug mode.
    pub debug: bool,
}

impl Default for WeaverConfig {
    fn default() -> Self {
        Self {
            app_dir: PathBuf::from("."),
            cache_dir: None,
            include_paths: Vec::new(),
            exclude_paths: Vec::new(),
            source_extensions: Vec::new(),
            log_level: LogLevel::Info,
            debug: false,
        }
    }
}

impl WeaverConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.app_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("app_dir must be set".into()).into());
        }

        let empty_path = self
            .include_paths
            .iter()
            .chain(self.exclude_paths.iter())
            .any(|p| p.as_os_str().is_empty());
        if empty_path {
            return Err(
                ConfigError::Invalid("include and exclude paths must not be empty".into()).into(),
            );
        }

        if self.source_extensions.iter().any(|e| e.starts_with('.')) {
            return Err(ConfigError::Invalid(
                "source extensions are given without the leading dot".into(),
            )
            .into());
        }

        Ok(())
    }

    /// Build the filter selecting which files of the application to analyze.
    ///
    /// Relative include, exclude and cache paths are resolved against
    /// `app_dir`.
    pub fn source_filter(&self) -> SourceFilter {
        let mut exclude_paths: Vec<PathBuf> =
            self.exclude_paths.iter().map(|p| self.resolve(p)).collect();
        if let Some(cache_dir) = &self.cache_dir {
            exclude_paths.push(self.resolve(cache_dir));
        }

        SourceFilter {
            extensions: self.source_extensions.clone(),
            include_paths: self.include_paths.iter().map(|p| self.resolve(p)).collect(),
            exclude_paths,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.app_dir
            .join(path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

/// Selects the application files to analyze.
///
/// Paths are compared component-wise, so `/app/src` contains
/// `/app/src/Order.src` but not `/app/srcx/Order.src`. Filter paths are
/// already resolved against the application directory; the checked path is
/// taken as written, so callers pass the same absolute form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFilter {
    extensions: Vec<String>,
    include_paths: Vec<PathBuf>,
    exclude_paths: Vec<PathBuf>,
}

impl SourceFilter {
    /// Check whether `path` should be analyzed.
    pub fn accepts(&self, path: &Path) -> bool {
        if !self.extensions.is_empty() {
            let extension = path.extension().and_then(|e| e.to_str());
            match extension {
                Some(ext) if self.extensions.iter().any(|e| e == ext) => {}
                _ => return false,
            }
        }

        if !self.include_paths.is_empty() && !self.include_paths.iter().any(|p| path.starts_with(p))
        {
            return false;
        }

        !self.exclude_paths.iter().any(|p| path.starts_with(p))
    }
}
