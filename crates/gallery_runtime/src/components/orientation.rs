use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::GalleryRuntimeContext};

/// Re-reads the screen orientation whenever the host reports a rotation.
pub(super) fn install_orientation_listener(runtime: GalleryRuntimeContext) {
    let listener = window_event_listener_untyped("orientationchange", move |_| {
        runtime
            .host
            .get_value()
            .run_runtime_effect(runtime.dispatch, RuntimeEffect::ReadOrientation);
    });
    on_cleanup(move || listener.remove());
}
