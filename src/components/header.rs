// ============================================================================
// HEADER - Cabecera con wake lock, badge de sync y menú de ajustes
// ============================================================================

use yew::prelude::*;

use crate::components::{SettingsMenu, SyncStatusBadge};
use crate::hooks::{use_click_outside, use_wake_lock};
use crate::models::SyncSnapshot;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub snapshot: SyncSnapshot,
    pub show_sync_settings: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let wake_lock = use_wake_lock();
    let menu_open = use_state(|| false);
    let menu_node = use_node_ref();

    // Mismo patrón de cierre que el detalle de error del badge
    use_click_outside(menu_node.clone(), *menu_open, {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    });

    let on_wake_lock_click = {
        let toggle = wake_lock.toggle_wake_lock.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_menu_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_menu_close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let wake_lock_class = if wake_lock.is_active {
        "wake-lock-btn active"
    } else {
        "wake-lock-btn"
    };
    let wake_lock_title = if wake_lock.is_active {
        "Dejar que la pantalla se apague"
    } else {
        "Mantener la pantalla encendida"
    };

    html! {
        <header class="app-header">
            <h1 class="app-title">{"🎸 Chord Charts"}</h1>
            <div class="header-actions" ref={menu_node}>
                if props.show_sync_settings {
                    <SyncStatusBadge snapshot={props.snapshot.clone()} />
                }
                // Sin soporte de la plataforma el botón ni se monta
                if wake_lock.is_supported {
                    <button
                        class={wake_lock_class}
                        title={wake_lock_title}
                        aria-pressed={wake_lock.is_active.to_string()}
                        onclick={on_wake_lock_click}
                    >
                        { if wake_lock.is_active { "🔆" } else { "🌙" } }
                    </button>
                }
                <button class="menu-btn" title="Ajustes" onclick={on_menu_click}>{"⚙️"}</button>
                <SettingsMenu
                    active={*menu_open}
                    show_sync_settings={props.show_sync_settings}
                    on_close={on_menu_close}
                />
            </div>
        </header>
    }
}
