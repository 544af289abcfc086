// ============================================================================
// SYNC STATE - Superficie de estado del subsistema de sincronización
// ============================================================================
// Este wrapper lo MUTA la capa de sincronización con Drive (fuera de este
// repo de UI); la cabecera y los hooks solo lo leen vía `snapshot()`.
// Tras cada lote de cambios, esa capa llama a `notify_changed()` para que
// la UI re-renderice.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SyncSnapshot;
use crate::utils::{load_from_storage, save_to_storage, LAST_SYNC_STORAGE_KEY, SYNC_STATE_EVENT};

#[derive(Clone)]
pub struct ChartSyncState {
    is_syncing: Rc<RefCell<bool>>,
    last_sync_time: Rc<RefCell<Option<i64>>>,
    sync_error: Rc<RefCell<Option<String>>>,
    is_authenticated: Rc<RefCell<bool>>,
}

thread_local! {
    // Instancia única compartida entre la UI y la capa de sincronización
    static SYNC_STATE: ChartSyncState = ChartSyncState::new();
}

impl ChartSyncState {
    /// Crear estado nuevo, rehidratando la última sincronización persistida
    pub fn new() -> Self {
        let state = Self {
            is_syncing: Rc::new(RefCell::new(false)),
            last_sync_time: Rc::new(RefCell::new(None)),
            sync_error: Rc::new(RefCell::new(None)),
            is_authenticated: Rc::new(RefCell::new(false)),
        };
        if let Some(ts) = load_from_storage::<i64>(LAST_SYNC_STORAGE_KEY) {
            *state.last_sync_time.borrow_mut() = Some(ts);
        }
        state
    }

    /// Instancia global (clon barato: los campos comparten los mismos Rc)
    pub fn global() -> Self {
        SYNC_STATE.with(|s| s.clone())
    }

    /// Foto inmutable para proyectar en este render
    pub fn snapshot(&self) -> SyncSnapshot {
        SyncSnapshot {
            is_syncing: *self.is_syncing.borrow(),
            last_sync_time: *self.last_sync_time.borrow(),
            sync_error: self.sync_error.borrow().clone(),
            is_authenticated: *self.is_authenticated.borrow(),
        }
    }

    // --- Setters para la capa de sincronización ---

    pub fn set_syncing(&self, syncing: bool) {
        *self.is_syncing.borrow_mut() = syncing;
    }

    pub fn set_sync_error(&self, error: Option<String>) {
        *self.sync_error.borrow_mut() = error;
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        *self.is_authenticated.borrow_mut() = authenticated;
    }

    /// Sincronización completada: fija el timestamp, limpia el error y lo
    /// deja persistido para el próximo arranque
    pub fn record_sync_success(&self, timestamp_ms: i64) {
        *self.last_sync_time.borrow_mut() = Some(timestamp_ms);
        *self.sync_error.borrow_mut() = None;
        *self.is_syncing.borrow_mut() = false;
        if let Err(e) = save_to_storage(LAST_SYNC_STORAGE_KEY, &timestamp_ms) {
            log::warn!("⚠️ No se pudo persistir last_sync: {}", e);
        }
    }

    /// Avisar a la UI de que el estado cambió (evento de window, mismo
    /// mecanismo que el resto de notificaciones entre capas)
    pub fn notify_changed() {
        if let Some(window) = web_sys::window() {
            if let Ok(event) = web_sys::CustomEvent::new(SYNC_STATE_EVENT) {
                let _ = window.dispatch_event(&event);
            }
        }
    }
}

impl PartialEq for ChartSyncState {
    // Identidad por puntero: suficiente para Properties/deps de Yew, donde
    // lo que importa es "es la misma instancia compartida"
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.is_syncing, &other.is_syncing)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn estado_y_persistencia() {
        // Este test se ejecutaría en un entorno con localStorage disponible;
        // la lógica derivada (status, proyección) se cubre en models/sync.rs
    }
}
