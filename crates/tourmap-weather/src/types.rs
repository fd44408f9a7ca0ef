use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Envelope of `GET /v1/forecast?current_weather=true`.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

/// Conditions at the requested point right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Air temperature at 2 m, °C.
    pub temperature: f64,
    /// Wind speed at 10 m, km/h.
    pub windspeed: f64,
    /// WMO weather interpretation code.
    pub weathercode: i32,
    /// Local observation time (`"2024-05-01T14:00"`), when present and parseable.
    #[serde(default, deserialize_with = "lenient_time")]
    pub time: Option<NaiveDateTime>,
}

impl CurrentWeather {
    #[must_use]
    pub fn badge(&self) -> WeatherBadge {
        WeatherBadge::from_wmo_code(self.weathercode)
    }
}

fn lenient_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }))
}

/// Three-way condition summary shown next to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherBadge {
    Clear,
    Cloudy,
    Storm,
}

impl WeatherBadge {
    /// Codes 0–3 (clear to overcast) are `Clear`, 95 and above (thunderstorms)
    /// are `Storm`, everything in between is `Cloudy`.
    #[must_use]
    pub fn from_wmo_code(code: i32) -> Self {
        if code <= 3 {
            Self::Clear
        } else if code >= 95 {
            Self::Storm
        } else {
            Self::Cloudy
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Cloudy => "☁️",
            Self::Storm => "⛈️",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Storm => "Thunderstorm",
        }
    }
}
