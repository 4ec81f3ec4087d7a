//! Weather-code classification shared by the ASCII scenes and the icons.

/// Visual bucket for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Clear,
    PartlyCloudy,
    Fog,
    Drizzle,
    RainShower,
    Thunderstorm,
    Cloudy,
}

/// Checked in order, first match wins. Anything unmatched is `Cloudy`.
const CODE_RANGES: &[(i64, i64, WeatherKind)] = &[
    (0, 0, WeatherKind::Clear),
    (1, 3, WeatherKind::PartlyCloudy),
    (45, 48, WeatherKind::Fog),
    (51, 67, WeatherKind::Drizzle),
    (80, 82, WeatherKind::RainShower),
    (95, 99, WeatherKind::Thunderstorm),
];

impl WeatherKind {
    pub fn from_code(code: i64) -> Self {
        CODE_RANGES
            .iter()
            .find(|(lo, hi, _)| (*lo..=*hi).contains(&code))
            .map(|(_, _, kind)| *kind)
            .unwrap_or(WeatherKind::Cloudy)
    }

    pub const fn all() -> &'static [WeatherKind] {
        &[
            WeatherKind::Clear,
            WeatherKind::PartlyCloudy,
            WeatherKind::Fog,
            WeatherKind::Drizzle,
            WeatherKind::RainShower,
            WeatherKind::Thunderstorm,
            WeatherKind::Cloudy,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear Sky",
            WeatherKind::PartlyCloudy => "Partly Cloudy",
            WeatherKind::Fog => "Fog",
            WeatherKind::Drizzle => "Drizzle",
            WeatherKind::RainShower => "Rain Shower",
            WeatherKind::Thunderstorm => "Thunderstorm",
            WeatherKind::Cloudy => "Cloudy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "☀️",
            WeatherKind::PartlyCloudy => "⛅",
            WeatherKind::Fog => "🌫️",
            WeatherKind::Drizzle => "🌦️",
            WeatherKind::RainShower => "🌧️",
            WeatherKind::Thunderstorm => "⛈️",
            WeatherKind::Cloudy => "☁️",
        }
    }

    /// Multi-line scene; the last line carries the label.
    pub fn ascii_art(&self) -> &'static str {
        match self {
            WeatherKind::Clear => concat!(
                "    \\   /    \n",
                "     .-.     \n",
                "  ‒ (   ) ‒  \n",
                "     '-'     \n",
                "    /   \\    \n",
                "   Clear Sky  ",
            ),
            WeatherKind::PartlyCloudy => concat!(
                "   .--.      \n",
                ".-(    ).    \n",
                "(___.__)__)  \n",
                " Partly Cloudy",
            ),
            WeatherKind::Fog => concat!(
                "_ - _ - _ -   \n",
                " _ - _ - _    \n",
                "_ - _ - _ -   \n",
                "    Fog      ",
            ),
            WeatherKind::Drizzle => concat!(
                "     .-.     \n",
                "    (   ).   \n",
                "   (___(__)  \n",
                "  ‚ ‚ ‚ ‚    \n",
                " ‚ ‚ ‚ ‚     \n",
                "   Drizzle   ",
            ),
            WeatherKind::RainShower => concat!(
                "     .-.     \n",
                "    (   ).   \n",
                "   (___(__)  \n",
                "  ‚'‚'‚'‚'   \n",
                " ‚'‚'‚'‚'    \n",
                "  Rain Shower",
            ),
            WeatherKind::Thunderstorm => concat!(
                "     .-.     \n",
                "    (   ).   \n",
                "   (___(__)  \n",
                "  ‚'⚡'‚'⚡   \n",
                " ‚'‚'‚'‚'    \n",
                " Thunderstorm",
            ),
            WeatherKind::Cloudy => concat!(
                "      .--.   \n",
                "   .-(    ). \n",
                "  (___.__)__)\n",
                "    Cloudy   ",
            ),
        }
    }
}
