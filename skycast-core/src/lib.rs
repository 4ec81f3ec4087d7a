//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Place-name and country resolution against the Open-Meteo geocoder
//! - Current/hourly/daily weather retrieval from the Open-Meteo forecast API
//! - Weather-code classification and the text report renderer
//!
//! It is used by `skycast-cli`, but the pipeline pieces can be reused on their own.

pub mod condition;
pub mod config;
pub mod country;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;

use tracing::instrument;

pub use condition::WeatherKind;
pub use config::Config;
pub use country::resolve_country_code;
pub use error::{Error, Result, Service};
pub use model::{ForecastRequest, GeocodeCandidate, LocationQuery, ResolvedLocation, WeatherSnapshot};
pub use provider::{ForecastSource, Geocoder, OpenMeteoForecast, OpenMeteoGeocoder};
pub use render::{RenderOptions, render};

/// Outcome of one lookup: where, and what the weather is there.
#[derive(Debug, Clone)]
pub struct Report {
    pub location: ResolvedLocation,
    pub snapshot: WeatherSnapshot,
}

impl Report {
    pub fn render(&self, opts: RenderOptions) -> String {
        render::render(&self.snapshot, &self.location, opts)
    }
}

/// Geocode, then fetch the forecast. The second call starts only after the
/// first has finished; the first error ends the lookup.
#[instrument(skip(geocoder, forecast))]
pub async fn lookup(
    geocoder: &dyn Geocoder,
    forecast: &dyn ForecastSource,
    query: &LocationQuery,
    hourly: bool,
    daily: bool,
) -> Result<Report> {
    let location = geocoder.search(query).await?;
    let request = ForecastRequest::for_location(&location, hourly, daily);
    let snapshot = forecast.forecast(&request).await?;

    Ok(Report { location, snapshot })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::model::{CurrentConditions, CurrentUnits};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct FixedGeocoder(Option<GeocodeCandidate>);

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn search(&self, query: &LocationQuery) -> Result<ResolvedLocation> {
            self.0.clone().ok_or_else(|| Error::NotFound {
                location: query.text.clone(),
                country: query.country_hint.clone(),
            })
        }
    }

    #[derive(Debug, Default)]
    struct RecordingForecast {
        seen: Mutex<Vec<ForecastRequest>>,
    }

    #[async_trait]
    impl ForecastSource for RecordingForecast {
        async fn forecast(&self, request: &ForecastRequest) -> Result<WeatherSnapshot> {
            self.seen.lock().unwrap().push(*request);
            Ok(WeatherSnapshot {
                current: CurrentConditions {
                    time: "2024-05-01T12:00".into(),
                    temperature: 20.0,
                    humidity: 40.0,
                    apparent_temperature: 19.0,
                    precipitation: 0.0,
                    weather_code: 45,
                    wind_speed: 3.0,
                    wind_direction: 90.0,
                },
                current_units: CurrentUnits::default(),
                hourly: None,
                hourly_units: None,
                daily: None,
                daily_units: None,
            })
        }
    }

    fn tokyo() -> GeocodeCandidate {
        GeocodeCandidate {
            name: "Tokyo".into(),
            latitude: 35.6895,
            longitude: 139.69171,
            country: "Japan".into(),
            country_code: "JP".into(),
            admin1: "Tokyo".into(),
        }
    }

    #[tokio::test]
    async fn lookup_passes_coordinates_and_flags_through() {
        let geocoder = FixedGeocoder(Some(tokyo()));
        let forecast = RecordingForecast::default();

        let report = lookup(&geocoder, &forecast, &LocationQuery::new("Tokyo", None), true, false)
            .await
            .unwrap();

        let seen = forecast.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].latitude, 35.6895);
        assert!(seen[0].include_hourly);
        assert!(!seen[0].include_daily);

        let text = report.render(RenderOptions::new(true, false));
        assert!(text.contains("📍 Location: Tokyo, Japan"));
        assert!(text.contains("Fog"));
    }

    #[tokio::test]
    async fn lookup_stops_before_forecast_when_not_found() {
        let geocoder = FixedGeocoder(None);
        let forecast = RecordingForecast::default();

        let err = lookup(&geocoder, &forecast, &LocationQuery::new("Nowhere", None), false, false)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(forecast.seen.lock().unwrap().is_empty());
    }
}
