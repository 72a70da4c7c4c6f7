//! HTTP helpers for talking to the scoring backend.
//!
//! The browser build goes through `window.fetch`; native builds (tests, the
//! host binary) use reqwest. Both share the same status/body decoding.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use scoring_types::{VideoRequest, VideoResponse};

/// Base URL of the scoring API, fixed at compile time.
pub const API_BASE_URL: &str = match option_env!("VIDEO_SCORING_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Errors returned by the API helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("HTTP requests are not available in this build")]
    Unsupported,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Join an API path onto [`API_BASE_URL`].
pub fn api_url(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Path of a single scored video. The identifier comes straight from the
/// address bar, so it is percent-encoded as a single segment.
pub fn scored_video_path(identifier: &str) -> String {
    format!("/score-video/{}/", urlencoding::encode(identifier))
}

/// Extract a readable message from an error body.
///
/// FastAPI-style backends answer `{"detail": "..."}`; anything else is
/// passed through trimmed.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Turn a raw status + body into a typed result.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            detail: error_detail(body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and decode the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    tracing::debug!("GET {}", url);
    let (status, body) = transport::send("GET", &url, None).await?;
    decode_response(status, &body)
}

/// POST `body` as JSON to `path` and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    tracing::debug!("POST {}", url);
    let (status, body) = transport::send("POST", &url, Some(payload)).await?;
    decode_response(status, &body)
}

/// Submit a brief for generation and scoring.
pub async fn score_video(request: &VideoRequest) -> Result<VideoResponse, ApiError> {
    post_json("/score-video", request).await
}

/// Load a previously scored video by identifier.
pub async fn fetch_scored_video(identifier: &str) -> Result<VideoResponse, ApiError> {
    fetch_json(&scored_video_path(identifier)).await
}

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::ApiError;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    fn js_err(e: JsValue) -> ApiError {
        ApiError::Network(format!("{:?}", e))
    }

    pub async fn send(method: &str, url: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_err)?;
        }

        let window = web_sys::window().ok_or(ApiError::Unsupported)?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let response: Response = value.dyn_into().map_err(js_err)?;

        let text = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .as_string()
            .unwrap_or_default();

        Ok((response.status(), text))
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
mod transport {
    use super::ApiError;

    pub async fn send(method: &str, url: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
        let client = reqwest::Client::new();
        let mut request = match method {
            "POST" => client.post(url),
            _ => client.get(url),
        };
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, text))
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
mod transport {
    use super::ApiError;

    pub async fn send(_method: &str, _url: &str, _body: Option<String>) -> Result<(u16, String), ApiError> {
        Err(ApiError::Unsupported)
    }
}
