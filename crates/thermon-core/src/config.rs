//! Startup configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags. The result is validated once and never reloaded.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sensor::DEFAULT_ZONE_PATH;
use crate::thermal::{DEFAULT_CRITICAL, DEFAULT_WARNING, Thresholds};

/// Poll interval used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Contents of a config file. Every key is optional.
///
/// ```toml
/// warning = 70.0
/// critical = 90.0
/// interval = "1m"
/// zone = "/sys/class/hwmon/hwmon1/temp1_input"
/// color = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    pub interval: Option<String>,
    pub zone: Option<PathBuf>,
    pub color: Option<bool>,
}

impl FileConfig {
    /// Loads a config file from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line. `None` falls through to the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    pub interval: Option<Duration>,
    pub zone: Option<PathBuf>,
    pub color: Option<bool>,
    pub max_ticks: Option<u64>,
}

/// Validated settings passed into the poll loop.
#[derive(Debug, Clone)]
pub struct Settings {
    pub thresholds: Thresholds,
    pub interval: Duration,
    pub zone: PathBuf,
    pub color: bool,
    /// Stop after this many ticks. `None` polls until cancelled.
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            interval: DEFAULT_INTERVAL,
            zone: PathBuf::from(DEFAULT_ZONE_PATH),
            color: true,
            max_ticks: None,
        }
    }
}

impl Settings {
    /// Merges the file and the flags over the defaults and validates the result.
    ///
    /// # Errors
    /// Returns an error for an unparseable or non-positive interval and for
    /// thresholds that are not ordered `warning < critical`.
    pub fn resolve(file: &FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let warning = overrides
            .warning
            .or(file.warning)
            .unwrap_or(DEFAULT_WARNING);
        let critical = overrides
            .critical
            .or(file.critical)
            .unwrap_or(DEFAULT_CRITICAL);

        let interval = match (overrides.interval, file.interval.as_deref()) {
            (Some(interval), _) => interval,
            (None, Some(raw)) => parse_interval(raw)?,
            (None, None) => DEFAULT_INTERVAL,
        };
        if interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval);
        }

        Ok(Self {
            thresholds: Thresholds::new(warning, critical)?,
            interval,
            zone: overrides
                .zone
                .or_else(|| file.zone.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ZONE_PATH)),
            color: overrides.color.or(file.color).unwrap_or(true),
            max_ticks: overrides.max_ticks,
        })
    }
}

/// Parses a duration such as `30s`, `1m30s`, `250ms` or `1.5h`.
///
/// Accepted units: `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`. Every number
/// needs a unit. Zero and negative durations are rejected.
///
/// # Errors
/// Returns [`ConfigError::NonPositiveInterval`] for zero or negative input and
/// [`ConfigError::InvalidInterval`] for anything malformed.
pub fn parse_interval(input: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason| ConfigError::InvalidInterval {
        input: input.to_string(),
        reason,
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty duration"));
    }
    if trimmed.starts_with('-') || trimmed == "0" {
        return Err(ConfigError::NonPositiveInterval);
    }

    let mut rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if rest.is_empty() {
        return Err(invalid("expected a number"));
    }
    let mut total_nanos: u128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(invalid("expected a number"));
        }
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let unit_nanos: u64 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            "" => return Err(invalid("missing unit")),
            _ => return Err(invalid("unknown unit")),
        };

        let nanos = if number.contains('.') {
            let value: f64 = number
                .parse()
                .ok()
                .ok_or_else(|| invalid("malformed number"))?;
            (value * unit_nanos as f64).round() as u128
        } else {
            let value: u128 = number
                .parse()
                .ok()
                .ok_or_else(|| invalid("malformed number"))?;
            value
                .checked_mul(u128::from(unit_nanos))
                .ok_or_else(|| invalid("out of range"))?
        };

        total_nanos = total_nanos
            .checked_add(nanos)
            .ok_or_else(|| invalid("out of range"))?;
        rest = tail;
    }

    if total_nanos == 0 {
        return Err(ConfigError::NonPositiveInterval);
    }
    let total_nanos = u64::try_from(total_nanos)
        .ok()
        .ok_or_else(|| invalid("out of range"))?;
    Ok(Duration::from_nanos(total_nanos))
}

/// Formats an interval the way it is written on the command line, e.g. `1m30s`.
pub fn format_interval(interval: Duration) -> String {
    if interval < Duration::from_secs(1) {
        let nanos = u64::from(interval.subsec_nanos());
        let (scale, unit) = if nanos < 1_000 {
            (1, "ns")
        } else if nanos < 1_000_000 {
            (1_000, "µs")
        } else {
            (1_000_000, "ms")
        };
        return format!("{}{unit}", decimal(nanos / scale, nanos % scale, scale));
    }

    let total = interval.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(
        out,
        "{}s",
        decimal(seconds, u64::from(interval.subsec_nanos()), 1_000_000_000)
    );
    out
}

/// `whole` plus `remainder / scale`, without trailing zeros. `scale` is a power of ten.
fn decimal(whole: u64, remainder: u64, scale: u64) -> String {
    if remainder == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let fraction = format!("{remainder:0width$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
