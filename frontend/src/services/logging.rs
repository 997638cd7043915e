use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

const LOG_ENDPOINT: &str = "/api/logs";

/// Mirrors diagnostics to the browser console and the server log
pub struct Logger;

impl Logger {
    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Fire and forget; a lost log line must never surface in the UI
        spawn_local(async move {
            if let Ok(request) = Request::post(LOG_ENDPOINT).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}
