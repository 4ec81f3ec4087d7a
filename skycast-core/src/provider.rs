use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::warn;

use crate::{
    error::{Error, Result, Service, truncate_body},
    model::{ForecastRequest, LocationQuery, ResolvedLocation, WeatherSnapshot},
};

pub mod forecast;
pub mod geocoding;

pub use forecast::OpenMeteoForecast;
pub use geocoding::OpenMeteoGeocoder;

/// Turns a place name into exactly one location.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn search(&self, query: &LocationQuery) -> Result<ResolvedLocation>;
}

/// Fetches conditions (and optional forecasts) for a coordinate.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn forecast(&self, request: &ForecastRequest) -> Result<WeatherSnapshot>;
}

/// Read the whole body, reject non-success statuses, then decode JSON.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    service: Service,
    res: Response,
) -> Result<T> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| Error::Transport { service, source })?;

    if !status.is_success() {
        warn!(%service, %status, "upstream returned an error status");
        return Err(Error::Status {
            service,
            status,
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| Error::Decode { service, source })
}
