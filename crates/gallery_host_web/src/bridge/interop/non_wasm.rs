use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_json<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
    Err(unsupported())
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn screen_orientation_type() -> Option<String> {
    None
}
