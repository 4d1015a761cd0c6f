//! Route wiring and HTTP translation of lookup results.

use axum::{
    Json, Router,
    extract::State,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use weather_core::{ApiError, WeatherQuery, WeatherReply, WeatherService};

/// Per-process state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    service: WeatherService,
}

impl AppState {
    pub fn new(service: WeatherService) -> Self {
        Self { service }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", post(get_weather))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// `POST /weather`: validate the body, run the lookup, render the reply.
async fn get_weather(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let query = match parse_query(payload) {
        Ok(query) => query,
        Err(err) => return error_response(&err),
    };

    match state.service.lookup(&query).await {
        Ok(WeatherReply::Json(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(WeatherReply::Xml(doc)) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "application/xml")], doc).into_response()
        }
        Err(err) => {
            tracing::warn!(status = err.status(), error = %err, "weather lookup failed");
            error_response(&err)
        }
    }
}

/// Extract `city` and `output_format` from the raw body.
///
/// Anything that is not a JSON object carrying both fields as strings is an
/// invalid request. Other fields are ignored.
fn parse_query(payload: Result<Json<Value>, JsonRejection>) -> Result<WeatherQuery, ApiError> {
    let Ok(Json(body)) = payload else {
        return Err(ApiError::InvalidRequest);
    };

    let city = body.get("city").and_then(Value::as_str);
    let output_format = body.get("output_format").and_then(Value::as_str);

    match (city, output_format) {
        (Some(city), Some(output_format)) => Ok(WeatherQuery {
            city: city.to_string(),
            output_format: output_format.to_string(),
        }),
        _ => Err(ApiError::InvalidRequest),
    }
}

fn error_response(err: &ApiError) -> Response {
    let status =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
