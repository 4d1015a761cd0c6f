//! Core library for the weather lookup service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The upstream weather provider client
//! - The lookup service and its JSON/XML representations
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod xml;

pub use config::Config;
pub use error::ApiError;
pub use model::{OutputFormat, WeatherQuery, WeatherRecord, WeatherReply};
pub use provider::{CurrentWeather, ProviderError};
pub use service::WeatherService;
