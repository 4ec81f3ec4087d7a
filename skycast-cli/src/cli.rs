use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser};
use skycast_core::{
    Config, LocationQuery, OpenMeteoForecast, OpenMeteoGeocoder, RenderOptions, lookup,
};
use tracing::debug;

const EXAMPLES: &str = "\
Examples:
  skycast London
  skycast London GB
  skycast -24h \"New York\" US
  skycast -7d \"San Francisco\"";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current weather and forecasts for a place name",
    override_usage = "skycast [options] <location> [country]",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Show 24-hour forecast
    #[arg(long = "24h")]
    pub hourly: bool,

    /// Show 7-day forecast
    #[arg(long = "7d")]
    pub daily: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read endpoints and timeout from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Place name, optionally followed by a country name or code
    #[arg(value_name = "LOCATION")]
    pub location: Vec<String>,
}

/// Rewrite the single-dash `-24h` / `-7d` spellings to their long form.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if after_separator {
                return arg;
            }
            let long = match arg.to_str() {
                Some("--") => {
                    after_separator = true;
                    None
                }
                Some("-24h") => Some("--24h"),
                Some("-7d") => Some("--7d"),
                _ => None,
            };
            long.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

impl Cli {
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// `None` when no location was given.
    pub fn query(&self) -> Option<LocationQuery> {
        LocationQuery::from_tokens(&self.location)
    }

    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.hourly, self.daily)
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let Some(query) = self.query() else {
            println!("{}", Self::command().render_help());
            return Ok(ExitCode::FAILURE);
        };
        debug!(?query, hourly = self.hourly, daily = self.daily, "starting lookup");

        let config = self.load_config()?;
        let http = config.http_client()?;
        let geocoder = OpenMeteoGeocoder::new(http.clone(), &config);
        let forecast = OpenMeteoForecast::new(http, &config);

        let report = lookup(&geocoder, &forecast, &query, self.hourly, self.daily)
            .await
            .context("weather lookup failed")?;

        print!("{}", report.render(self.render_options()));
        Ok(ExitCode::SUCCESS)
    }
}
