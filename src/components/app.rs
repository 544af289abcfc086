// ============================================================================
// APP - Componente raíz
// ============================================================================

use gloo_events::EventListener;
use yew::prelude::*;

use crate::components::Header;
use crate::hooks::use_feature_flags;
use crate::state::ChartSyncState;
use crate::utils::SYNC_STATE_EVENT;

#[function_component(App)]
pub fn app() -> Html {
    let flags = use_feature_flags();

    // La capa de sincronización con Drive muta su estado por su cuenta y
    // avisa con un evento de window; aquí solo se escucha y se re-renderiza
    let sync_version = use_state(|| 0u32);
    {
        let sync_version = sync_version.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let mut n = 0u32;
                EventListener::new(&window, SYNC_STATE_EVENT, move |_| {
                    n += 1;
                    sync_version.set(n);
                })
            });
            move || drop(listener)
        });
    }
    let _ = *sync_version;

    // Foto de solo-lectura para este render
    let snapshot = ChartSyncState::global().snapshot();

    html! {
        <div class="app">
            <Header snapshot={snapshot} show_sync_settings={flags.sync_settings} />
            <main class="chart-area">
                // Aquí montan la rejilla y el editor de charts (fuera de
                // este corte del repo)
                <p class="placeholder">{"Todavía no hay charts. Crea uno desde el menú."}</p>
            </main>
        </div>
    }
}
