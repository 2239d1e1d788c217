//! Shared transport interop for browser bridge calls.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    imp::fetch_json(url).await
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}

pub fn screen_orientation_type() -> Option<String> {
    imp::screen_orientation_type()
}
