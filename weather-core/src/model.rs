use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Untyped passthrough record as returned by the upstream provider.
///
/// The shape is deliberately not projected into a fixed struct: whatever
/// fields the provider returns are forwarded as-is. `serde_json` is built
/// with `preserve_order`, so iteration follows the provider's field order.
pub type WeatherRecord = Map<String, Value>;

/// Validated inbound lookup request.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
    pub output_format: String,
}

/// Requested response representation.
///
/// Parsed from the raw `output_format` field only at the format branch, after
/// the upstream call, so upstream failures take precedence over a bad format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OutputFormat {
    type Error = ApiError;

    // Matching is exact: "JSON" is as invalid as "csv".
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(ApiError::InvalidOutputFormat),
        }
    }
}

/// Successful lookup result in the representation the client asked for.
#[derive(Debug, Clone)]
pub enum WeatherReply {
    Json(Value),
    Xml(Vec<u8>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_as_str_roundtrip() {
        for format in [OutputFormat::Json, OutputFormat::Xml] {
            let parsed = OutputFormat::try_from(format.as_str()).expect("roundtrip should succeed");
            assert_eq!(format, parsed);
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = OutputFormat::try_from("csv").unwrap_err();
        assert_eq!(err.to_string(), "Invalid output_format");
    }

    #[test]
    fn format_matching_is_case_sensitive() {
        assert!(OutputFormat::try_from("JSON").is_err());
        assert!(OutputFormat::try_from("Xml").is_err());
    }
}
