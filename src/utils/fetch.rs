//! Network fetching for the JSON listing endpoint, with timeout support.
//!
//! [`JsonSource`] implements the core's `Source` seam against the server's
//! `GET {path}?json=1` convention using the browser Fetch API, racing each
//! request against a timeout promise.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{FETCH_TIMEOUT_MS, JSON_QUERY};
use crate::core::error::FetchError;
use crate::core::navigator::Source;
use crate::models::{DirectoryListing, FileRecord};

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("window not available".to_string());
    };

    // Timeout promise resolves to undefined, distinguishing it from a
    // completed fetch.
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    match JsFuture::from(Promise::race(&race_array)).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "unknown error".to_string())),
    }
}

/// Fetch source for the `{path}?json=1` endpoint convention.
pub struct JsonSource {
    base_url: String,
}

impl JsonSource {
    /// `base_url` is prepended verbatim to node paths; pass `""` to fetch
    /// relative to the current origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}?{}", self.base_url, path, JSON_QUERY)
    }
}

impl Source for JsonSource {
    async fn fetch_directory(&self, path: &str) -> Result<DirectoryListing, FetchError> {
        fetch_json(&self.url_for(path)).await
    }

    async fn fetch_file(&self, path: &str) -> Result<FileRecord, FetchError> {
        fetch_json(&self.url_for(path)).await
    }
}

/// Fetch and decode JSON from a URL.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Fetch text from a URL with the Fetch API, honoring `FETCH_TIMEOUT_MS`.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window()
        .ok_or_else(|| FetchError::Network("browser window not available".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::Network("failed to create request".to_string()))?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| FetchError::Network("response is not a Response".to_string()))?;

            if !resp.ok() {
                return Err(FetchError::Http(resp.status()));
            }

            let text = JsFuture::from(
                resp.text()
                    .map_err(|_| FetchError::Network("failed to read response".to_string()))?,
            )
            .await
            .map_err(|_| FetchError::Network("failed to read response".to_string()))?;

            text.as_string()
                .ok_or_else(|| FetchError::Malformed("response body is not text".to_string()))
        }
    }
}
