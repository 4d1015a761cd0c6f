use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::model::WeatherRecord;

use super::{CurrentWeather, ProviderError};

const CURRENT_URL: &str = "https://weatherapi-com.p.rapidapi.com/current.json";
const RAPIDAPI_HOST: &str = "weatherapi-com.p.rapidapi.com";

/// Upper bound on a single upstream call, connect included.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// weatherapi.com client, reached through the RapidAPI gateway.
#[derive(Debug, Clone)]
pub struct RapidApiProvider {
    api_key: String,
    http: Client,
}

impl RapidApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl CurrentWeather for RapidApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherRecord, ProviderError> {
        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[("q", city)])
            .header("X-RapidAPI-Key", self.api_key.as_str())
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|err| ProviderError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Transport(format!(
                "upstream request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let record: WeatherRecord =
            serde_json::from_str(&body).map_err(|err| ProviderError::Decode(err.to_string()))?;

        Ok(record)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
