//! Runs the poll loop against the configured thermal zone.

use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use thermon_core::config::Settings;
use thermon_core::render::Renderer;
use thermon_core::sensor::ThermalZone;
use thermon_core::{interrupt, monitor};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Prints the banner, then polls until interrupted or the tick limit is hit.
///
/// # Errors
/// Returns an error if the runtime cannot be built or output cannot be written.
pub fn run(settings: &Settings) -> Result<()> {
    let cancel = CancellationToken::new();
    if let Err(err) = interrupt::init(cancel.clone()) {
        warn!("signal handler not installed: {err}");
    }

    let mut renderer = Renderer::new(io::stdout(), io::stderr(), settings.color);
    renderer
        .banner(settings, Local::now())
        .context("write startup banner")?;

    let mut sensor = ThermalZone::new(&settings.zone);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("create tokio runtime")?;
    let summary = rt
        .block_on(monitor::run(&mut sensor, settings, &mut renderer, &cancel))
        .context("write monitor output")?;

    debug!(?summary, "monitor finished");
    if interrupt::is_interrupted() {
        renderer
            .stopped(summary.ticks, summary.errors)
            .context("write shutdown notice")?;
    }
    Ok(())
}
