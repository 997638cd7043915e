//! Submission round trip shared by the browser controller and its tests.
//!
//! Everything here is DOM-free: the frontend supplies a [`DataTransport`]
//! backed by `fetch`, tests supply a recording double, and both get the same
//! decision about where to navigate or which banner message to show.

use async_trait::async_trait;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::{
    SubmissionPayload, MISSING_REQUIRED_FIELDS_MESSAGE, SEND_FAILURE_MESSAGE,
    SERVER_ERROR_MESSAGE, SUCCESS_PAGE,
};

/// Why a submission attempt ended without navigating away
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitFailure {
    #[error("name and value are required")]
    MissingRequiredFields,

    #[error("server responded with status {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(String),
}

impl SubmitFailure {
    /// Text for the error banner
    pub fn banner_message(&self) -> String {
        match self {
            Self::MissingRequiredFields => MISSING_REQUIRED_FIELDS_MESSAGE.to_string(),
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Server { detail: None, .. } => SERVER_ERROR_MESSAGE.to_string(),
            Self::Transport(_) | Self::MalformedResponse(_) => SEND_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a payload to the data endpoint.
///
/// `Err` means no response was received at all.
#[async_trait(?Send)]
pub trait DataTransport {
    async fn post_data(&self, payload: &SubmissionPayload) -> Result<TransportResponse, String>;
}

/// Send `payload` once and return the success page URL to navigate to.
pub async fn submit<T>(transport: &T, payload: &SubmissionPayload) -> Result<String, SubmitFailure>
where
    T: DataTransport + ?Sized,
{
    let response = transport
        .post_data(payload)
        .await
        .map_err(SubmitFailure::Transport)?;
    interpret_response(response)
}

/// Map a completed response to the redirect URL or a failure.
pub fn interpret_response(response: TransportResponse) -> Result<String, SubmitFailure> {
    if !response.is_success() {
        return Err(SubmitFailure::Server {
            status: response.status,
            detail: error_detail(&response.body),
        });
    }

    let data: Value = serde_json::from_str(&response.body)
        .map_err(|e| SubmitFailure::MalformedResponse(e.to_string()))?;
    Ok(success_redirect_url(&data))
}

/// Largest integer a JavaScript number holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// `/success?data=<encoded JSON>` for an opaque response body
pub fn success_redirect_url(data: &Value) -> String {
    let mut data = data.clone();
    normalize_numbers(&mut data);
    format!("{}?data={}", SUCCESS_PAGE, encode_uri_component(&data.to_string()))
}

// Integral doubles print without a fraction in the browser (`1.0` and `1e2`
// become `1` and `100`).
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(number) if number.is_f64() => {
            if let Some(float) = number.as_f64() {
                if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
                    *number = Number::from(float as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(fields) => fields.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// matching the browser's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    urlencoding::encode(input)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

// Only a non-empty string `detail` counts; anything else falls back to the generic message.
fn error_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed
        .get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
