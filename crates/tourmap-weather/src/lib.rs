//! Current conditions from Open-Meteo for a resolved place.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenMeteoClient;
pub use error::WeatherError;
pub use types::{CurrentWeather, WeatherBadge};
