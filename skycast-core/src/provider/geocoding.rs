use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::{
    config::Config,
    error::{Error, Result, Service},
    model::{GeocodeCandidate, LocationQuery, ResolvedLocation},
};

use super::{Geocoder, decode_response};

#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    url: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            url: config.geocoding_url.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    #[instrument(skip(self), fields(location = %query.text))]
    async fn search(&self, query: &LocationQuery) -> Result<ResolvedLocation> {
        let code = query.country_code();
        let params = geocode_params(query, &code, &self.language);
        debug!(?params, "querying geocoder");

        let res = self
            .http
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(|source| Error::Transport {
                service: Service::Geocoding,
                source,
            })?;

        let parsed: GeocodeResponse = decode_response(Service::Geocoding, res).await?;
        debug!(candidates = parsed.results.len(), "geocoder answered");

        let location = select_candidate(parsed.results, query, &code)?;
        info!(
            name = %location.name,
            country = %location.country_code,
            lat = location.latitude,
            lon = location.longitude,
            "resolved location"
        );
        Ok(location)
    }
}

/// Query string for the geocoding endpoint.
///
/// A country hint widens the search to 10 candidates so the caller can pick
/// one in the right country; `country_code` is only sent for a known code.
pub fn geocode_params(
    query: &LocationQuery,
    country_code: &str,
    language: &str,
) -> Vec<(&'static str, String)> {
    let count = if query.country_hint.is_some() { "10" } else { "1" };

    let mut params = vec![
        ("name", query.text.clone()),
        ("count", count.to_string()),
        ("language", language.to_string()),
    ];
    if query.country_hint.is_some() && !country_code.is_empty() {
        params.push(("country_code", country_code.to_string()));
    }
    params
}

/// Pick the location for a run out of the geocoder's answer.
///
/// Without a hint the first candidate wins, keeping the service's ranking.
/// With a hint the first candidate whose code matches (ignoring case) wins.
pub fn select_candidate(
    candidates: Vec<GeocodeCandidate>,
    query: &LocationQuery,
    country_code: &str,
) -> Result<ResolvedLocation> {
    let not_found = || Error::NotFound {
        location: query.text.clone(),
        country: query.country_hint.clone(),
    };

    match &query.country_hint {
        None => candidates.into_iter().next().ok_or_else(not_found),
        Some(_) => candidates
            .into_iter()
            .find(|c| !c.country_code.is_empty() && c.country_code.eq_ignore_ascii_case(country_code))
            .ok_or_else(not_found),
    }
}
