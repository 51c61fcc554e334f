//! Error types for the Weave aspect engine.
//!
//! Errors are organized by subsystem, with each subsystem having its own
//! error type. The root error type, `Error`, can wrap any of them, allowing
//! for uniform error handling at the top level.
//!
//! Matching advisors against classes never fails, so there is no matcher
//! error type: a pointcut predicate only answers yes or no.

use thiserror::Error;

/// Root error type for the Weave system.
#[derive(Debug, Error)]
pub enum Error {
    /// Aspect container lookups
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// Aspect loading errors
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    /// Reflection and annotation reading errors
    #[error("Reflection error: {0}")]
    Reflection(#[from] ReflectionError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging subscriber initialization failed
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error reports an unknown identifier.
    ///
    /// Callers use this to decide whether a lookup may succeed after the
    /// owning aspect has been loaded and registered.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Container(
                ContainerError::AspectNotFound(_)
                    | ContainerError::PointcutNotFound(_)
                    | ContainerError::AdvisorNotFound(_)
            )
        )
    }
}

/// Errors raised by the aspect container.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// No aspect is registered under the given ID
    #[error("Aspect not found: {0}")]
    AspectNotFound(String),

    /// No pointcut is registered under the given ID
    #[error("Pointcut not found: {0}")]
    PointcutNotFound(String),

    /// No advisor is registered under the given ID
    #[error("Advisor not found: {0}")]
    AdvisorNotFound(String),
}

/// Errors raised while loading pointcuts and advisors from aspects.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A loader extension rejected the aspect/point combination it was given
    #[error("Invalid aspect configuration: {0}")]
    Configuration(String),

    /// A loader kind outside the supported set
    #[error("Unsupported loader kind: {0}")]
    UnsupportedLoaderKind(String),
}

/// Errors raised by the reflection and annotation subsystems.
#[derive(Debug, Error)]
pub enum ReflectionError {
    /// A reflection point kind the reader does not recognize
    #[error("Unsupported reflection point: {0}")]
    UnsupportedPoint(String),
}

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration source could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but is not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type used throughout the Weave system.
pub type Result<T> = std::result::Result<T, Error>;
