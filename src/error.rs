use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a fragment or document fetch. Carries enough detail to log; never surfaced
/// to the end user, who only ever sees the section's fallback markup.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server responded outside the 2xx range.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected document shape.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Wrap a raw [`JsValue`] thrown by the fetch machinery.
    pub(crate) fn transport(value: JsValue) -> Self {
        Self::Transport(format!("{value:?}"))
    }
}
