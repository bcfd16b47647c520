//! CLI entry and argument handling.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use thermon_core::config::{FileConfig, Overrides, Settings, parse_interval};
use thermon_core::logging;

mod monitor;

#[derive(Parser, Debug)]
#[command(name = "thermon")]
#[command(version)]
#[command(about = "Poll a thermal zone and report its temperature against warning and critical thresholds")]
struct Cli {
    /// Warning temperature threshold in Celsius [default: 75.0]
    #[arg(
        short = 'w',
        long,
        value_name = "CELSIUS",
        env = "THERMON_WARNING",
        allow_negative_numbers = true
    )]
    warning: Option<f64>,

    /// Critical temperature threshold in Celsius [default: 85.0]
    #[arg(
        short = 'c',
        long,
        value_name = "CELSIUS",
        env = "THERMON_CRITICAL",
        allow_negative_numbers = true
    )]
    critical: Option<f64>,

    /// Check interval, e.g. 10s, 1m, 1m30s [default: 30s]
    #[arg(
        short = 'i',
        long,
        value_name = "DURATION",
        env = "THERMON_INTERVAL",
        value_parser = parse_interval
    )]
    interval: Option<Duration>,

    /// Thermal zone file path [default: /sys/class/thermal/thermal_zone0/temp]
    #[arg(short = 'z', long, value_name = "PATH", env = "THERMON_ZONE")]
    zone: Option<PathBuf>,

    /// Read settings from a TOML file (flags take precedence)
    #[arg(long, value_name = "PATH", env = "THERMON_CONFIG")]
    config: Option<PathBuf>,

    /// Stop after N checks instead of polling until interrupted
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        env = "THERMON_COUNT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: Option<u64>,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, env = "THERMON_NO_COLOR", value_parser = BoolishValueParser::new())]
    no_color: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        Overrides {
            warning: self.warning,
            critical: self.critical,
            interval: self.interval,
            zone: self.zone.clone(),
            color: (self.no_color || no_color_env).then_some(false),
            max_ticks: self.count,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init();

    let file = match cli.config.as_deref() {
        Some(path) => FileConfig::load_from(path)?,
        None => FileConfig::default(),
    };

    let settings = match Settings::resolve(&file, cli.overrides()) {
        Ok(settings) => settings,
        Err(err) if err.is_usage() => {
            return Err(Cli::command()
                .error(ErrorKind::ValueValidation, err)
                .into());
        }
        Err(err) => return Err(err.into()),
    };

    monitor::run(&settings)
}
