//! Terminal output for the monitor.
//!
//! Status lines go to the output stream and sample errors to the error
//! stream. Colors come from [`Status::color`].

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use crossterm::style::{Color, Stylize, style};

use crate::config::{Settings, format_interval};
use crate::error::SampleError;
use crate::thermal::Status;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats one status line without color.
///
/// `[2026-10-19 14:03:00] WARNING: Current temperature: 80.00°C`
pub fn status_line<Tz>(at: &DateTime<Tz>, status: Status, celsius: f64) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "[{}] {}: Current temperature: {:.2}°C",
        at.format(TIMESTAMP_FORMAT),
        status,
        celsius
    )
}

/// Writes monitor output to a pair of streams.
pub struct Renderer<O, E> {
    out: O,
    err: E,
    color: bool,
}

impl<O: Write, E: Write> Renderer<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Prints the startup banner.
    ///
    /// # Errors
    /// Returns an error if the output stream cannot be written.
    pub fn banner(&mut self, settings: &Settings, started_at: DateTime<Local>) -> io::Result<()> {
        writeln!(
            self.out,
            "Starting Thermal Monitor at {}",
            started_at.to_rfc3339_opts(SecondsFormat::Secs, false)
        )?;
        writeln!(
            self.out,
            "Thresholds: Warning >= {:.1}°C, Critical >= {:.1}°C",
            settings.thresholds.warning(),
            settings.thresholds.critical()
        )?;
        writeln!(
            self.out,
            "Checking every {}",
            format_interval(settings.interval)
        )?;
        writeln!(self.out, "Thermal zone: {}", settings.zone.display())?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Prints one classified sample.
    ///
    /// # Errors
    /// Returns an error if the output stream cannot be written.
    pub fn sample(&mut self, at: DateTime<Local>, status: Status, celsius: f64) -> io::Result<()> {
        let line = status_line(&at, status, celsius);
        if self.color {
            writeln!(self.out, "{}", style(line).with(status.color()))?;
        } else {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Prints a per-tick read failure.
    ///
    /// # Errors
    /// Returns an error if the error stream cannot be written.
    pub fn sample_error(&mut self, error: &SampleError) -> io::Result<()> {
        let line = format!("Error reading temperature: {error}");
        if self.color {
            writeln!(self.err, "{}", style(line).with(Color::White))?;
        } else {
            writeln!(self.err, "{line}")?;
        }
        self.err.flush()
    }

    /// Prints the shutdown notice on the error stream.
    ///
    /// # Errors
    /// Returns an error if the error stream cannot be written.
    pub fn stopped(&mut self, ticks: u64, errors: u64) -> io::Result<()> {
        writeln!(
            self.err,
            "Thermal monitor stopped after {ticks} check(s), {errors} read error(s)"
        )?;
        self.err.flush()
    }

    /// Consumes the renderer and returns the streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
