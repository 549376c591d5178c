use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::{error::FetchError, util};

/// GET a static resource and return its body as text. All network and non-2xx-status
/// conditions resolve to a [`FetchError`]; nothing is thrown past this boundary. No
/// retries and no timeout, a stalled request is the browser's concern.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let response = JsFuture::from(util::window().fetch_with_str(url))
        .await
        .map_err(FetchError::transport)?;
    let response: Response = response.dyn_into().map_err(FetchError::transport)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(FetchError::transport)?)
        .await
        .map_err(FetchError::transport)?;

    body.as_string()
        .ok_or_else(|| FetchError::Transport("response body was not text".to_string()))
}

/// GET a JSON document and deserialize it.
pub async fn fetch_json<T>(url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let body = fetch_text(url).await?;

    Ok(serde_json::from_str(&body)?)
}
