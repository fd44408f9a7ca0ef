//! Shared domain types and configuration for tourmap.

pub mod app_config;
pub mod config;
pub mod error;
pub mod geo;
pub mod poi;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use geo::{Coordinate, PlaceQuery};
pub use poi::{Poi, SearchResult, POI_COUNT};
