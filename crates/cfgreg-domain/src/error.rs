//! Error handling types

use thiserror::Error;

/// Boxed error returned by provider constructors and other foreign sources
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the configuration registry
#[derive(Error, Debug)]
pub enum Error {
    /// A provider could not be instantiated from its class
    ///
    /// Covers a missing no-argument constructor as well as a constructor
    /// that failed; callers are not expected to tell the two apart.
    #[error("Failed to construct provider {class}")]
    ProviderConstruction {
        /// Name of the class that could not be instantiated
        class: String,
        /// Underlying constructor failure, if any
        #[source]
        source: Option<BoxError>,
    },

    /// A provider or contract name did not match any catalog entry
    #[error("Unknown {kind} '{name}'. Available: {available:?}")]
    UnknownName {
        /// What was being looked up ("provider class", "contract")
        kind: &'static str,
        /// The name that failed to resolve
        name: String,
        /// Names that would have resolved
        available: Vec<String>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registry error creation methods
impl Error {
    /// Create a provider construction error without an underlying cause
    pub fn provider_construction<S: Into<String>>(class: S) -> Self {
        Self::ProviderConstruction {
            class: class.into(),
            source: None,
        }
    }

    /// Create a provider construction error wrapping the constructor failure
    pub fn provider_construction_with_source<S: Into<String>>(class: S, source: BoxError) -> Self {
        Self::ProviderConstruction {
            class: class.into(),
            source: Some(source),
        }
    }

    /// Create an unknown-name error for a failed catalog lookup
    pub fn unknown_name<S: Into<String>>(
        kind: &'static str,
        name: S,
        available: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
