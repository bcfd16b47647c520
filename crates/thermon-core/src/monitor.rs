//! The read-classify-render poll loop.

use std::io::{self, Write};

use chrono::Local;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::Settings;
use crate::render::Renderer;
use crate::sensor::Sensor;
use crate::thermal::{Status, Thresholds};

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Sample(Status),
    Failed,
}

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub samples: u64,
    pub errors: u64,
}

impl Summary {
    fn record(&mut self, outcome: TickOutcome) {
        self.ticks += 1;
        match outcome {
            TickOutcome::Sample(_) => self.samples += 1,
            TickOutcome::Failed => self.errors += 1,
        }
    }
}

/// Runs one read-classify-render cycle.
///
/// A failed read is reported on the error stream and is not an error here.
///
/// # Errors
/// Returns an error only if writing to the output streams fails.
pub fn tick<S, O, E>(
    sensor: &mut S,
    thresholds: &Thresholds,
    renderer: &mut Renderer<O, E>,
) -> io::Result<TickOutcome>
where
    S: Sensor + ?Sized,
    O: Write,
    E: Write,
{
    match sensor.read() {
        Ok(celsius) => {
            let status = thresholds.classify(celsius);
            debug!(celsius, status = %status, "sample classified");
            renderer.sample(Local::now(), status, celsius)?;
            Ok(TickOutcome::Sample(status))
        }
        Err(err) => {
            // The renderer already reports this on stderr.
            debug!(error = %err, "sample failed");
            renderer.sample_error(&err)?;
            Ok(TickOutcome::Failed)
        }
    }
}

/// Polls `sensor` every `settings.interval` until `cancel` fires or
/// `settings.max_ticks` ticks have run.
///
/// The first tick happens immediately. Ticks that fall behind are delayed,
/// never bursted.
///
/// # Errors
/// Returns an error only if writing to the output streams fails.
pub async fn run<S, O, E>(
    sensor: &mut S,
    settings: &Settings,
    renderer: &mut Renderer<O, E>,
    cancel: &CancellationToken,
) -> io::Result<Summary>
where
    S: Sensor + ?Sized,
    O: Write,
    E: Write,
{
    let mut ticker = time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut summary = Summary::default();

    loop {
        if settings.max_ticks.is_some_and(|max| summary.ticks >= max) {
            debug!(ticks = summary.ticks, "tick limit reached");
            break;
        }

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(ticks = summary.ticks, "poll loop cancelled");
                break;
            }
            _ = ticker.tick() => {}
        }

        let outcome = tick(sensor, &settings.thresholds, renderer)?;
        summary.record(outcome);
    }

    Ok(summary)
}
