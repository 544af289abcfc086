// ============================================================================
// SYNC STATUS BADGE - Indicador de sincronización en la cabecera
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_click_outside, use_sync_status};
use crate::models::{SyncSnapshot, SyncStatus};

#[derive(Properties, PartialEq)]
pub struct SyncStatusBadgeProps {
    pub snapshot: SyncSnapshot,
}

#[function_component(SyncStatusBadge)]
pub fn sync_status_badge(props: &SyncStatusBadgeProps) -> Html {
    let projection = use_sync_status(&props.snapshot);
    let show_detail = use_state(|| false);
    let node = use_node_ref();

    // El detalle de error se cierra igual que cualquier dropdown: clic fuera
    use_click_outside(node.clone(), *show_detail, {
        let show_detail = show_detail.clone();
        Callback::from(move |_| show_detail.set(false))
    });

    // Sin sesión no se pinta nada
    let Some(projection) = projection else {
        return html! {};
    };

    let (icon, text, class) = match projection.status {
        SyncStatus::Idle => (
            "✅",
            format!("Sincronizado · {}", projection.last_sync_label),
            "sync-badge synced",
        ),
        SyncStatus::Syncing => ("⏳", "Sincronizando...".to_string(), "sync-badge syncing"),
        SyncStatus::Error => (
            "⚠️",
            "Error de sincronización".to_string(),
            "sync-badge error",
        ),
    };

    let onclick = {
        let show_detail = show_detail.clone();
        let is_error = projection.status == SyncStatus::Error;
        Callback::from(move |_: MouseEvent| {
            if is_error {
                show_detail.set(!*show_detail);
            }
        })
    };

    html! {
        <div ref={node} class={class} {onclick} title={projection.last_sync_label.clone()}>
            <span class="sync-icon">{icon}</span>
            <span class="sync-text">{text}</span>
            if *show_detail {
                if let Some(message) = &projection.error_message {
                    // El mensaje llega tal cual del subsistema de sync
                    <div class="sync-error-detail" role="alert">
                        <p>{message.clone()}</p>
                        <p class="sync-error-last">{projection.last_sync_label.clone()}</p>
                    </div>
                }
            }
        </div>
    }
}
