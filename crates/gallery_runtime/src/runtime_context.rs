//! Runtime provider and context wiring for the gallery.
//!
//! This module owns the long-lived state signal, the runtime effect queue, and host wiring. UI
//! composition stays in [`crate::components`].

use gallery_host::HostServices;
use leptos::*;

use crate::{
    categories::default_category_labels,
    effect_executor,
    host::GalleryHostContext,
    model::GalleryState,
    reducer::{reduce_gallery, GalleryAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and dispatching [`GalleryAction`] values.
pub struct GalleryRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<GalleryHostContext>,
    /// Reactive gallery state signal.
    pub state: RwSignal<GalleryState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GalleryAction>,
}

impl GalleryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GalleryAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`GalleryRuntimeContext`] to descendant components and boots the first listing.
pub fn GalleryProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let config = host_services.config.clone();
    let host = store_value(GalleryHostContext::new(host_services));
    let state = create_rw_signal(GalleryState::new(config, default_category_labels()));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: GalleryAction| {
        let mut gallery = state.get_untracked();
        let previous = gallery.clone();

        match reduce_gallery(&mut gallery, action) {
            Ok(new_effects) => {
                if gallery != previous {
                    state.set(gallery);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("gallery reducer error: {err}"),
        }
    });

    let runtime = GalleryRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    logging::log!(
        "gallery runtime booting with `{}` host",
        host.with_value(|host| host.host_strategy_name())
    );
    runtime.dispatch_action(GalleryAction::Boot);

    children().into_view()
}

/// Returns the current [`GalleryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery_runtime() -> GalleryRuntimeContext {
    use_context::<GalleryRuntimeContext>().expect("GalleryRuntimeContext not provided")
}
