use std::sync::Arc;

use serde_json::Value;

use crate::error::ApiError;
use crate::model::{OutputFormat, WeatherQuery, WeatherReply};
use crate::provider::{CurrentWeather, ProviderError};
use crate::xml;

/// The weather lookup core: one linear pass per request, one outbound call,
/// no shared mutable state.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn CurrentWeather>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn CurrentWeather>) -> Self {
        Self { provider }
    }

    /// Resolve a query into the requested representation.
    ///
    /// The output format is only parsed after the upstream call, so an
    /// unreachable provider reports as an upstream failure even when the
    /// requested format is also bad.
    pub async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherReply, ApiError> {
        if query.city.trim().is_empty() {
            return Err(ApiError::InvalidRequest);
        }

        tracing::info!(city = %query.city, format = %query.output_format, "looking up weather");

        let record = self.provider.current(&query.city).await.map_err(|err| match err {
            ProviderError::Transport(detail) => ApiError::Upstream(detail),
            ProviderError::Decode(detail) => ApiError::Value(detail),
        })?;

        match OutputFormat::try_from(query.output_format.as_str())? {
            OutputFormat::Json => Ok(WeatherReply::Json(Value::Object(record))),
            OutputFormat::Xml => Ok(WeatherReply::Xml(xml::to_xml(&record)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherRecord;
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Debug)]
    struct FixedProvider(Value);

    #[async_trait]
    impl CurrentWeather for FixedProvider {
        async fn current(&self, _city: &str) -> Result<WeatherRecord, ProviderError> {
            Ok(self.0.as_object().expect("stub record must be an object").clone())
        }
    }

    #[derive(Debug)]
    struct DownProvider;

    #[async_trait]
    impl CurrentWeather for DownProvider {
        async fn current(&self, _city: &str) -> Result<WeatherRecord, ProviderError> {
            Err(ProviderError::Transport("connection refused".to_string()))
        }
    }

    #[derive(Debug)]
    struct GarbledProvider;

    #[async_trait]
    impl CurrentWeather for GarbledProvider {
        async fn current(&self, _city: &str) -> Result<WeatherRecord, ProviderError> {
            Err(ProviderError::Decode("expected value at line 1 column 1".to_string()))
        }
    }

    fn upstream_record() -> Value {
        json!({"location": {"name": "London"}, "current": {"temp_c": 15}})
    }

    fn service(provider: impl CurrentWeather + 'static) -> WeatherService {
        WeatherService::new(Arc::new(provider))
    }

    fn query(city: &str, output_format: &str) -> WeatherQuery {
        WeatherQuery { city: city.to_string(), output_format: output_format.to_string() }
    }

    #[tokio::test]
    async fn json_lookup_passes_the_record_through() {
        let service = service(FixedProvider(upstream_record()));

        let reply = service.lookup(&query("London", "json")).await.expect("lookup must succeed");

        match reply {
            WeatherReply::Json(value) => assert_eq!(value, upstream_record()),
            WeatherReply::Xml(_) => panic!("expected a JSON reply"),
        }
    }

    #[tokio::test]
    async fn xml_lookup_flattens_the_record() {
        let service = service(FixedProvider(upstream_record()));

        let reply = service.lookup(&query("London", "xml")).await.expect("lookup must succeed");

        let WeatherReply::Xml(doc) = reply else { panic!("expected an XML reply") };
        let doc = String::from_utf8(doc).expect("XML must be UTF-8");

        assert!(doc.contains("<weather>"));
        assert!(doc.contains("<location>{\"name\":\"London\"}</location>"));
        assert!(doc.contains("<current>{\"temp_c\":15}</current>"));
    }

    #[tokio::test]
    async fn empty_city_is_invalid_request() {
        // DownProvider would surface an upstream error if it were reached.
        let service = service(DownProvider);

        let err = service.lookup(&query("  ", "json")).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidRequest));
    }

    #[tokio::test]
    async fn unknown_format_is_rejected_after_the_fetch() {
        let service = service(FixedProvider(upstream_record()));

        let err = service.lookup(&query("London", "csv")).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidOutputFormat));
    }

    #[tokio::test]
    async fn upstream_failure_wins_over_a_bad_format() {
        let service = service(DownProvider);

        let err = service.lookup(&query("London", "csv")).await.unwrap_err();

        assert_eq!(err.to_string(), "Request Exception: connection refused");
    }

    #[tokio::test]
    async fn undecodable_body_is_a_value_error() {
        let service = service(GarbledProvider);

        let err = service.lookup(&query("London", "json")).await.unwrap_err();

        assert_eq!(err.status(), 400);
        assert!(err.to_string().starts_with("Value Error: "));
    }
}
