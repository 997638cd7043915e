//! # REST API for the data service
//!
//! Endpoints consumed by the submission form, plus the browser log sink.
//! Every failure is answered with an `ApiErrorResponse` so the form can show
//! the server's `detail`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{DeleteDataResponse, LogRequest, LogResponse, SubmissionPayload};
use tracing::{debug, error, info, warn};

use crate::{error::AppError, AppState};

/// POST /data
pub async fn create_data(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("POST /data - malformed payload: {}", rejection.body_text());
        rejection
    })?;
    info!("POST /data - name: {:?}", payload.name);

    let record = state.data_store.create(payload).await.map_err(|e| {
        warn!("POST /data - rejected: {}", e);
        e
    })?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /data
pub async fn list_data(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /data");
    Json(state.data_store.list().await)
}

/// GET /data/:id
pub async fn get_data(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    info!("GET /data/{}", id);
    Ok(Json(state.data_store.get(id).await?))
}

/// DELETE /data/:id
pub async fn delete_data(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    info!("DELETE /data/{}", id);

    let deleted_data = state.data_store.delete(id).await?;
    Ok(Json(DeleteDataResponse {
        message: format!("ID {}의 데이터가 삭제되었습니다.", id),
        deleted_data,
    }))
}

/// POST /api/logs - replays a browser diagnostic through the server log
pub async fn log_message(Json(request): Json<LogRequest>) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Json(LogResponse { success: true })
}

#[cfg(test)]
mod tests {
    use crate::{apply_layers, build_router, config::Config, error::INTERNAL_ERROR_DETAIL, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::{json, Value};
    use shared::{ApiErrorResponse, DataRecord, DeleteDataResponse};
    use tower::ServiceExt;

    fn app(state: &AppState) -> Router {
        build_router(state.clone(), &Config::default()).expect("router")
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        send_to(app(state), request).await
    }

    async fn send_to(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_create_returns_created_record() {
        let state = AppState::new();

        let (status, body) = send(
            &state,
            json_request(
                Method::POST,
                "/data",
                json!({"name": "alice", "value": "hello", "description": null}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let record: DataRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "alice");
        assert_eq!(record.value, "hello");
        assert_eq!(record.description, None);
    }

    #[tokio::test]
    async fn test_blank_name_returns_detail() {
        let state = AppState::new();

        let (status, body) = send(
            &state,
            json_request(
                Method::POST,
                "/data",
                json!({"name": "", "value": "hello", "description": null}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.status_code, 422);
        assert_eq!(error.detail, "이름은 필수 입력 항목입니다.");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_error_body() {
        let state = AppState::new();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/data")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{"))
            .unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
    }

    #[tokio::test]
    async fn test_list_returns_records_in_id_order() {
        let state = AppState::new();
        for name in ["first", "second"] {
            send(
                &state,
                json_request(Method::POST, "/data", json!({"name": name, "value": "v", "description": null})),
            )
            .await;
        }

        let (status, body) = send(&state, empty_request(Method::GET, "/data")).await;

        assert_eq!(status, StatusCode::OK);
        let records: Vec<DataRecord> = serde_json::from_value(body).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
    }

    #[tokio::test]
    async fn test_list_is_empty_initially() {
        let state = AppState::new();
        let (status, body) = send(&state, empty_request(Method::GET, "/data")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_get_missing_record_is_not_found() {
        let state = AppState::new();

        let (status, body) = send(&state, empty_request(Method::GET, "/data/5")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "ID 5에 해당하는 데이터를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let state = AppState::new();
        send(
            &state,
            json_request(Method::POST, "/data", json!({"name": "a", "value": "b", "description": "c"})),
        )
        .await;

        let (status, body) = send(&state, empty_request(Method::DELETE, "/data/1")).await;
        assert_eq!(status, StatusCode::OK);
        let deleted: DeleteDataResponse = serde_json::from_value(body).unwrap();
        assert_eq!(deleted.message, "ID 1의 데이터가 삭제되었습니다.");
        assert_eq!(deleted.deleted_data.description.as_deref(), Some("c"));

        let (status, body) = send(&state, empty_request(Method::DELETE, "/data/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_log_sink_acknowledges() {
        let state = AppState::new();

        let (status, body) = send(
            &state,
            json_request(
                Method::POST,
                "/api/logs",
                json!({"level": "error", "message": "Submission failed", "component": "MessageForm"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    async fn panicking_handler() -> StatusCode {
        panic!("store lock poisoned")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_internal_error() {
        let router = apply_layers(
            Router::new().route("/explode", get(panicking_handler)),
            &Config::default(),
        )
        .unwrap();

        let (status, body) = send_to(router, empty_request(Method::GET, "/explode")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.error, "Internal Server Error");
        assert_eq!(error.status_code, 500);
        assert_eq!(error.detail, INTERNAL_ERROR_DETAIL);
    }
}
