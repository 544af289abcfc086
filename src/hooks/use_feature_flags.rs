use gloo_events::EventListener;
use yew::prelude::*;

use crate::models::FeatureFlags;
use crate::utils::{get_raw, DEBUG_SYNC_STORAGE_KEY};

/// Flags vigentes para este render. Se recalculan al montar y en cada
/// navegación del historial (back/forward dispara "popstate"); siempre como
/// objeto entero, nunca parcheados campo a campo.
#[hook]
pub fn use_feature_flags() -> FeatureFlags {
    let flags = use_state(read_current_flags);

    {
        let flags = flags.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    let nuevos = read_current_flags();
                    log::info!("🚩 Navegación detectada, flags re-evaluados: {:?}", nuevos);
                    flags.set(nuevos);
                })
            });
            move || drop(listener)
        });
    }

    *flags
}

fn read_current_flags() -> FeatureFlags {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let stored = get_raw(DEBUG_SYNC_STORAGE_KEY);
    FeatureFlags::evaluate(&query, stored.as_deref())
}
