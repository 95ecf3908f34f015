//! Shared domain types and configuration for zeromap.
//!
//! Everything here is plain data: place records as loaded from the Seoul
//! open-data feed, WGS-84 coordinate pairs with the Korea bounding-box
//! gate, and the env-var-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod coords;
pub mod place;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use coords::Coordinates;
pub use place::PlaceRecord;
