use serde::{Deserialize, Deserializer, Serialize};

use crate::country::resolve_country_code;

/// What the user asked for: a place name and an optional country hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub text: String,
    pub country_hint: Option<String>,
}

impl LocationQuery {
    pub fn new(text: impl Into<String>, country_hint: Option<String>) -> Self {
        Self {
            text: text.into(),
            country_hint: country_hint.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Interpret positional CLI tokens.
    ///
    /// Returns `None` when there are no tokens. With two or more tokens the
    /// last one becomes the country hint if it resolves to a country code;
    /// otherwise every token is part of the place name.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let (last, rest) = tokens.split_last()?;

        if !rest.is_empty() && !resolve_country_code(last.as_ref()).is_empty() {
            let text = join_tokens(rest);
            return Some(Self::new(text, Some(last.as_ref().to_string())));
        }

        Some(Self::new(join_tokens(tokens), None))
    }

    /// ISO code derived from the hint, empty when there is no usable hint.
    pub fn country_code(&self) -> String {
        self.country_hint
            .as_deref()
            .map(resolve_country_code)
            .unwrap_or_default()
    }
}

fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One entry of the geocoding `results` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub admin1: String,
}

/// The single candidate chosen for a run.
pub type ResolvedLocation = GeocodeCandidate;

impl GeocodeCandidate {
    /// `name[, admin1][, country]`, skipping a region equal to the name.
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if !self.admin1.is_empty() && self.admin1 != self.name {
            label.push_str(", ");
            label.push_str(&self.admin1);
        }
        if !self.country.is_empty() {
            label.push_str(", ");
            label.push_str(&self.country);
        }
        label
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub include_hourly: bool,
    pub include_daily: bool,
}

impl ForecastRequest {
    pub fn for_location(location: &ResolvedLocation, include_hourly: bool, include_daily: bool) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            include_hourly,
            include_daily,
        }
    }
}

/// Decoded forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    #[serde(default)]
    pub current_units: CurrentUnits,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
    #[serde(default)]
    pub hourly_units: Option<HourlyUnits>,
    #[serde(default)]
    pub daily: Option<DailySeries>,
    #[serde(default)]
    pub daily_units: Option<DailyUnits>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: f64,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    pub weather_code: i64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUnits {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: String,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: String,
    pub apparent_temperature: String,
    pub precipitation: String,
    pub weather_code: String,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: String,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: String,
}

/// Parallel arrays, one entry per forecast hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m", deserialize_with = "nullable_vec")]
    pub temperature: Vec<f64>,
    #[serde(deserialize_with = "nullable_vec")]
    pub weather_code: Vec<i64>,
    #[serde(deserialize_with = "nullable_vec")]
    pub precipitation: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyUnits {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: String,
    pub weather_code: String,
    pub precipitation: String,
}

/// Parallel arrays, one entry per forecast day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max", deserialize_with = "nullable_vec")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min", deserialize_with = "nullable_vec")]
    pub temperature_min: Vec<f64>,
    #[serde(deserialize_with = "nullable_vec")]
    pub weather_code: Vec<i64>,
    #[serde(deserialize_with = "nullable_vec")]
    pub precipitation_sum: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyUnits {
    pub time: String,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: String,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: String,
    pub weather_code: String,
    pub precipitation_sum: String,
}

/// Open-Meteo reports gaps in a series as `null`; treat them as zero.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(Option::unwrap_or_default).collect())
}
