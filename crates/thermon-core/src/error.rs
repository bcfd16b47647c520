//! Error types shared by the library.
//!
//! Configuration errors are fatal and only occur at startup. Sample errors
//! belong to a single tick and never stop the poll loop.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("warning threshold ({warning}) must be less than critical threshold ({critical})")]
    InvalidThresholds { warning: f64, critical: f64 },

    #[error("thresholds must be finite numbers (warning: {warning}, critical: {critical})")]
    NonFiniteThreshold { warning: f64, critical: f64 },

    #[error("interval must be greater than zero")]
    NonPositiveInterval,

    #[error("invalid interval '{input}': {reason}")]
    InvalidInterval { input: String, reason: &'static str },

    #[error("read config file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse config file {}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Whether the error comes from a bad flag value rather than the environment.
    ///
    /// Usage errors are reported together with the usage text and exit code 2.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidThresholds { .. }
                | Self::NonFiniteThreshold { .. }
                | Self::NonPositiveInterval
                | Self::InvalidInterval { .. }
        )
    }
}

/// A failed sensor read. Recoverable: the next tick tries again.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to read thermal file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid temperature format in {}: '{raw}' ({source})", path.display())]
    Parse {
        path: PathBuf,
        raw: String,
        source: ParseFloatError,
    },

    #[error("temperature in {} is not a finite number: '{raw}'", path.display())]
    NotFinite { path: PathBuf, raw: String },
}
