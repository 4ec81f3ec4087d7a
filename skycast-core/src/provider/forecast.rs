use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::{Error, Result, Service},
    model::{ForecastRequest, WeatherSnapshot},
    render::{DAILY_LIMIT, HOURLY_LIMIT},
};

use super::{ForecastSource, decode_response};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m,wind_direction_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code,precipitation_sum";

#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
    url: String,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            url: config.forecast_url.clone(),
        }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    #[instrument(skip(self))]
    async fn forecast(&self, request: &ForecastRequest) -> Result<WeatherSnapshot> {
        let params = forecast_params(request);
        debug!(?params, "querying forecast");

        let res = self
            .http
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(|source| Error::Transport {
                service: Service::Forecast,
                source,
            })?;

        let snapshot: WeatherSnapshot = decode_response(Service::Forecast, res).await?;
        debug!(
            hourly = snapshot.hourly.as_ref().map(|h| h.time.len()),
            daily = snapshot.daily.as_ref().map(|d| d.time.len()),
            "forecast answered"
        );
        Ok(snapshot)
    }
}

/// Query string for the forecast endpoint. Coordinates use 6 decimals.
pub fn forecast_params(request: &ForecastRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("latitude", format!("{:.6}", request.latitude)),
        ("longitude", format!("{:.6}", request.longitude)),
        ("current", CURRENT_FIELDS.to_string()),
    ];

    if request.include_hourly {
        params.push(("hourly", HOURLY_FIELDS.to_string()));
        params.push(("forecast_hours", HOURLY_LIMIT.to_string()));
    }

    if request.include_daily {
        params.push(("daily", DAILY_FIELDS.to_string()));
        params.push(("forecast_days", DAILY_LIMIT.to_string()));
    }

    params
}
