//! Remote Catalog Fetcher
//!
//! One GET against the places endpoint, decoded straight from the
//! response body. No retry, no timeout at this layer.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Place;

/// Endpoint serving the place catalog
pub const PLACES_URL: &str = "https://vanillajsacademy.com/api/places.json";

/// Failure to obtain or decode the remote catalog. Every variant leads
/// to the same rendered error state.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("undecodable catalog body: {0}")]
    Decode(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError::Network(format!("{value:?}"))
    }
}

/// Fetch and decode the catalog
pub async fn fetch_places(url: &str) -> Result<Vec<Place>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = JsFuture::from(response.json()?)
        .await
        .map_err(|err| FetchError::Decode(format!("{err:?}")))?;
    serde_wasm_bindgen::from_value(body).map_err(|err| FetchError::Decode(err.to_string()))
}
