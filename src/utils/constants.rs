/// Clave persistida que habilita el panel de ajustes de sincronización.
/// La escribe a mano quien depura: `localStorage["nekogata-debug-sync"] = "true"`
pub const DEBUG_SYNC_STORAGE_KEY: &str = "nekogata-debug-sync";

/// Última sincronización completada, en epoch millis
pub const LAST_SYNC_STORAGE_KEY: &str = "chord-charts-last-sync";

/// Evento de window que dispara la capa de sincronización cuando cambia su estado
pub const SYNC_STATE_EVENT: &str = "chord-sync-state-changed";

/// Cada cuánto se refresca la etiqueta "hace N minutos"
pub const RELATIVE_TIME_REFRESH_MS: u32 = 30 * 1000;
