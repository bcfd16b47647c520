//! Threshold classification for temperature samples.
//!
//! A sample is compared against an ordered (warning, critical) pair. Both
//! bounds are inclusive: a sample equal to a bound lands in the more severe
//! bucket.

use std::fmt;

use crossterm::style::Color;

use crate::error::ConfigError;

/// Default warning threshold in Celsius.
pub const DEFAULT_WARNING: f64 = 75.0;

/// Default critical threshold in Celsius.
pub const DEFAULT_CRITICAL: f64 = 85.0;

/// Severity of a single sample, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Normal,
    Warning,
    Critical,
}

impl Status {
    /// Label printed in the status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    /// Display color associated with the status.
    pub fn color(self) -> Color {
        match self {
            Self::Normal => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Critical => Color::Red,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated (warning, critical) pair with `warning < critical`.
///
/// The only way to obtain one is through [`Thresholds::new`], so holders can
/// rely on the ordering without checking it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    warning: f64,
    critical: f64,
}

impl Thresholds {
    /// Validates and builds a threshold pair.
    ///
    /// # Errors
    /// Returns an error if either bound is not finite or `warning >= critical`.
    pub fn new(warning: f64, critical: f64) -> Result<Self, ConfigError> {
        validate(warning, critical)?;
        Ok(Self { warning, critical })
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn critical(&self) -> f64 {
        self.critical
    }

    pub fn classify(&self, sample: f64) -> Status {
        classify(sample, self.warning, self.critical)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING,
            critical: DEFAULT_CRITICAL,
        }
    }
}

/// Checks that the bounds are usable for classification.
///
/// # Errors
/// Returns [`ConfigError::NonFiniteThreshold`] for NaN or infinite bounds and
/// [`ConfigError::InvalidThresholds`] when `warning >= critical`.
pub fn validate(warning: f64, critical: f64) -> Result<(), ConfigError> {
    if !warning.is_finite() || !critical.is_finite() {
        return Err(ConfigError::NonFiniteThreshold { warning, critical });
    }
    if warning >= critical {
        return Err(ConfigError::InvalidThresholds { warning, critical });
    }
    Ok(())
}

/// Classifies a sample. Critical wins when both bounds are reached.
pub fn classify(sample: f64, warning: f64, critical: f64) -> Status {
    if sample >= critical {
        Status::Critical
    } else if sample >= warning {
        Status::Warning
    } else {
        Status::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_ordered_pair() {
        assert!(validate(75.0, 85.0).is_ok());
        assert!(validate(-10.0, 0.0).is_ok());
        assert!(validate(84.999, 85.0).is_ok());
    }

    #[test]
    fn test_validate_rejects_equal_or_inverted_pair() {
        let cases = [(75.0, 75.0), (90.0, 85.0), (0.0, -1.0)];
        for (warning, critical) in cases {
            let err = validate(warning, critical).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidThresholds { .. }),
                "({warning}, {critical}) gave {err:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(matches!(
            validate(f64::NAN, 85.0),
            Err(ConfigError::NonFiniteThreshold { .. })
        ));
        assert!(matches!(
            validate(75.0, f64::INFINITY),
            Err(ConfigError::NonFiniteThreshold { .. })
        ));
    }

    #[test]
    fn test_classify_buckets() {
        let cases = [
            (40.0, Status::Normal),
            (74.99, Status::Normal),
            (75.0, Status::Warning),
            (80.0, Status::Warning),
            (84.99, Status::Warning),
            (85.0, Status::Critical),
            (90.0, Status::Critical),
        ];
        for (sample, expected) in cases {
            assert_eq!(classify(sample, 75.0, 85.0), expected, "sample {sample}");
        }
    }

    #[test]
    fn test_classify_critical_takes_precedence() {
        // Not reachable through Thresholds, but the free function stays total.
        assert_eq!(classify(50.0, 50.0, 50.0), Status::Critical);
    }

    #[test]
    fn test_thresholds_new_and_classify() {
        let thresholds = Thresholds::new(75.0, 85.0).unwrap();
        assert_eq!(thresholds.classify(80.0).label(), "WARNING");
        assert_eq!(thresholds.classify(90.0).label(), "CRITICAL");
        assert_eq!(thresholds.classify(40.0).label(), "OK");
        assert!(Thresholds::new(85.0, 75.0).is_err());
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert!((thresholds.warning() - DEFAULT_WARNING).abs() < f64::EPSILON);
        assert!((thresholds.critical() - DEFAULT_CRITICAL).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_ordering_and_colors() {
        assert!(Status::Normal < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert_eq!(Status::Normal.color(), Color::Green);
        assert_eq!(Status::Warning.color(), Color::Yellow);
        assert_eq!(Status::Critical.color(), Color::Red);
        assert_eq!(Status::Critical.to_string(), "CRITICAL");
    }
}
