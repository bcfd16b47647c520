//! Thermal zone reader.
//!
//! Sysfs thermal files hold a single number in millidegrees Celsius,
//! e.g. `42000` for 42.0°C.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SampleError;

/// Thermal zone read when no path is configured.
pub const DEFAULT_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;

/// Source of temperature samples in Celsius.
pub trait Sensor {
    /// Takes one sample. Each call is an independent attempt.
    ///
    /// # Errors
    /// Returns an error if the sample could not be obtained.
    fn read(&mut self) -> Result<f64, SampleError>;
}

/// A sysfs-style thermal file.
#[derive(Debug, Clone)]
pub struct ThermalZone {
    path: PathBuf,
}

impl ThermalZone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sensor for ThermalZone {
    fn read(&mut self) -> Result<f64, SampleError> {
        read_celsius(&self.path)
    }
}

/// Reads a millidegree file and returns degrees Celsius.
///
/// # Errors
/// Returns [`SampleError::Read`] if the file cannot be read,
/// [`SampleError::Parse`] if its trimmed content is not a number, and
/// [`SampleError::NotFinite`] for `NaN` or infinite values.
pub fn read_celsius(path: &Path) -> Result<f64, SampleError> {
    let contents = fs::read_to_string(path).map_err(|source| SampleError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = contents.trim();
    let millidegrees: f64 = raw.parse().map_err(|source| SampleError::Parse {
        path: path.to_path_buf(),
        raw: raw.to_string(),
        source,
    })?;

    if !millidegrees.is_finite() {
        return Err(SampleError::NotFinite {
            path: path.to_path_buf(),
            raw: raw.to_string(),
        });
    }

    Ok(millidegrees / MILLIDEGREES_PER_DEGREE)
}
