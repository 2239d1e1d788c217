//! Browser capability bridge for `gallery_host_web` service adapters.
//!
//! Each function routes to the wasm interop layer when compiled for `wasm32` and to a native
//! fallback otherwise, so adapters keep one code path across targets.

mod interop;

use serde::de::DeserializeOwned;

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    interop::fetch_json(url).await
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    interop::open_external_url(url).await
}

pub fn screen_orientation_type() -> Option<String> {
    interop::screen_orientation_type()
}
