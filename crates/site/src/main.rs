//! Binary entrypoint for the browser-hosted gallery application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "The project gallery only runs in a browser: build `site_app` for wasm32 with `--features csr`."
    );
}
