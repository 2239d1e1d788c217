use super::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = JsFuture::from(window()?.fetch_with_str(url))
        .await
        .map_err(|err| format!("fetch `{url}` failed: {err:?}"))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| format!("fetch `{url}` resolved to a non-Response value"))?;
    if !response.ok() {
        return Err(format!("fetch `{url}` returned HTTP {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|err| format!("response body for `{url}` unavailable: {err:?}"))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|err| format!("response body for `{url}` is not JSON: {err:?}"))?;
    serde_wasm_bindgen::from_value(body)
        .map_err(|err| format!("unexpected response shape from `{url}`: {err}"))
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(|err| format!("window.open failed: {err:?}"))?;
    Ok(())
}

pub fn screen_orientation_type() -> Option<String> {
    let orientation = web_sys::window()?.screen().ok()?.orientation();
    js_sys::Reflect::get(orientation.as_ref(), &JsValue::from_str("type"))
        .ok()?
        .as_string()
}
