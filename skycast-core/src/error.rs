use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Which upstream service an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Geocoding,
    Forecast,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Geocoding => "geocoding",
            Service::Forecast => "forecast",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of the lookup pipeline. Every variant is fatal for a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{service} request failed: {source}")]
    Transport {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: Service,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode {service} response: {source}")]
    Decode {
        service: Service,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", not_found_message(.location, .country))]
    NotFound {
        location: String,
        country: Option<String>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

fn not_found_message(location: &str, country: &Option<String>) -> String {
    match country {
        Some(country) => format!("location '{location}' not found in {country}"),
        None => format!("location '{location}' not found"),
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_location_and_country() {
        let err = Error::NotFound {
            location: "Paris".into(),
            country: Some("France".into()),
        };
        assert_eq!(err.to_string(), "location 'Paris' not found in France");
        assert!(err.is_not_found());
    }

    #[test]
    fn not_found_without_country() {
        let err = Error::NotFound {
            location: "Atlantis".into(),
            country: None,
        };
        assert_eq!(err.to_string(), "location 'Atlantis' not found");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(150);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);

        assert_eq!(truncate_body("short"), "short");
    }
}
