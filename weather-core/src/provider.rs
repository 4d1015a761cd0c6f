use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::WeatherRecord;

pub mod rapidapi;

/// Errors from the upstream-call step, tagged so the service can choose the
/// client-visible failure class without inspecting message text.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request never completed cleanly: connect failure, timeout, or a
    /// non-2xx upstream status.
    #[error("{0}")]
    Transport(String),

    /// Upstream answered 2xx with a body that is not a JSON object.
    #[error("{0}")]
    Decode(String),
}

/// Abstraction over the upstream weather provider.
///
/// The lookup service holds a `dyn CurrentWeather`, so tests can substitute a
/// stub and the HTTP layer never needs live credentials.
#[async_trait]
pub trait CurrentWeather: Send + Sync + Debug {
    /// Fetch the current-conditions record for a city.
    ///
    /// Exactly one outbound call; no retries.
    async fn current(&self, city: &str) -> Result<WeatherRecord, ProviderError>;
}
