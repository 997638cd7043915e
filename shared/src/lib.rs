use serde::{Deserialize, Serialize};

pub mod submission;

pub use submission::{DataTransport, SubmitFailure, TransportResponse};

/// Shown when `name` or `value` is blank
pub const MISSING_REQUIRED_FIELDS_MESSAGE: &str = "이름과 메시지는 필수 입력 항목입니다.";

/// Shown for HTTP failures that carry no usable `detail`
pub const SERVER_ERROR_MESSAGE: &str = "서버 오류가 발생했습니다.";

/// Shown for network failures and unreadable success bodies
pub const SEND_FAILURE_MESSAGE: &str = "메시지 전송에 실패했습니다.";

/// How long the error banner stays visible
pub const ERROR_BANNER_TIMEOUT_MS: u32 = 3000;

/// Endpoint receiving submissions
pub const DATA_ENDPOINT: &str = "/data";

/// Page the browser is sent to after a successful submission
pub const SUCCESS_PAGE: &str = "/success";

/// Raw field values as read from the form at submit time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageFormInput {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl MessageFormInput {
    /// Trim every field and build the payload.
    ///
    /// Fails when `name` or `value` is empty after trimming. A blank
    /// description becomes `None` so it serializes as `null`, never `""`.
    pub fn into_payload(self) -> Result<SubmissionPayload, SubmitFailure> {
        let name = self.name.trim();
        let value = self.value.trim();
        if name.is_empty() || value.is_empty() {
            return Err(SubmitFailure::MissingRequiredFields);
        }

        let description = self.description.trim();
        Ok(SubmissionPayload {
            name: name.to_string(),
            value: value.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }
}

/// Body of `POST /data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub value: String,
    /// Always present on the wire; `null` when the user left it blank
    pub description: Option<String>,
}

/// A stored submission as returned by the data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub id: u64,
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteDataResponse {
    pub message: String,
    pub deleted_data: DataRecord,
}

/// Error body returned by the data service for every non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub status_code: u16,
    pub detail: String,
}

/// Diagnostic entry forwarded from the browser to the server log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
