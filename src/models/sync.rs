// ============================================================================
// SYNC MODEL - Proyección del estado de sincronización hacia la UI
// ============================================================================
// La capa de sincronización remota (Drive) es dueña de su estado; aquí solo
// se LEE y se proyecta a un enum pequeño que la UI sabe pintar.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado discreto que muestra la UI.
/// Prioridad: error > syncing > idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Syncing,
    Error,
}

/// Foto de solo-lectura del estado del subsistema de sincronización,
/// tomada en el momento del render. Timestamps en epoch millis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncSnapshot {
    pub is_syncing: bool,
    pub last_sync_time: Option<i64>,
    pub sync_error: Option<String>,
    pub is_authenticated: bool,
}

/// Lo que consume la cabecera. Derivado, nunca almacenado.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncProjection {
    pub status: SyncStatus,
    pub last_sync_label: String,
    pub error_message: Option<String>,
}

impl SyncSnapshot {
    pub fn status(&self) -> SyncStatus {
        if self.sync_error.is_some() {
            // El error manda, aunque haya una sincronización en vuelo
            SyncStatus::Error
        } else if self.is_syncing {
            SyncStatus::Syncing
        } else {
            SyncStatus::Idle
        }
    }

    /// Proyección completa, o `None` si no hay sesión autenticada
    /// (sin sesión ningún estado de sync significa nada: no se pinta).
    pub fn project(&self, now_ms: i64) -> Option<SyncProjection> {
        if !self.is_authenticated {
            return None;
        }

        Some(SyncProjection {
            status: self.status(),
            last_sync_label: format_relative_time(self.last_sync_time, now_ms),
            error_message: self.sync_error.clone(),
        })
    }
}

/// "hace N minutos/horas/días", siempre con división truncada.
/// Ojo: 90 minutos da "hace 1 horas", sin redondear ni promover de unidad.
pub fn format_relative_time(last_sync_ms: Option<i64>, now_ms: i64) -> String {
    let last = match last_sync_ms {
        Some(t) if t > 0 => t,
        _ => return "Nunca sincronizado".to_string(),
    };

    let delta = (now_ms - last).max(0);
    if delta < 60_000 {
        "Ahora mismo".to_string()
    } else if delta < 3_600_000 {
        format!("hace {} minutos", delta / 60_000)
    } else if delta < 86_400_000 {
        format!("hace {} horas", delta / 3_600_000)
    } else {
        format!("hace {} días", delta / 86_400_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_756_000_000_000;

    fn snapshot() -> SyncSnapshot {
        SyncSnapshot {
            is_syncing: false,
            last_sync_time: Some(NOW - 5 * 60_000),
            sync_error: None,
            is_authenticated: true,
        }
    }

    #[test]
    fn el_error_tiene_prioridad_sobre_syncing() {
        let snap = SyncSnapshot {
            is_syncing: true,
            sync_error: Some("429 rate limit".to_string()),
            ..snapshot()
        };
        assert_eq!(snap.status(), SyncStatus::Error);

        let proj = snap.project(NOW).unwrap();
        assert_eq!(proj.status, SyncStatus::Error);
        // El mensaje se expone tal cual, sin interpretarlo
        assert_eq!(proj.error_message.as_deref(), Some("429 rate limit"));
    }

    #[test]
    fn syncing_sin_error_y_por_defecto_idle() {
        let snap = SyncSnapshot {
            is_syncing: true,
            ..snapshot()
        };
        assert_eq!(snap.status(), SyncStatus::Syncing);
        assert_eq!(snapshot().status(), SyncStatus::Idle);
    }

    #[test]
    fn sin_autenticar_no_hay_proyeccion() {
        let snap = SyncSnapshot {
            is_authenticated: false,
            is_syncing: true,
            sync_error: Some("da igual".to_string()),
            ..snapshot()
        };
        assert_eq!(snap.project(NOW), None);
    }

    #[test]
    fn status_error_si_y_solo_si_hay_mensaje() {
        let con_error = SyncSnapshot {
            sync_error: Some("x".to_string()),
            ..snapshot()
        };
        let sin_error = snapshot();
        assert_eq!(con_error.status(), SyncStatus::Error);
        assert_ne!(sin_error.status(), SyncStatus::Error);
    }

    #[test]
    fn tiempo_relativo_centinelas() {
        assert_eq!(format_relative_time(None, NOW), "Nunca sincronizado");
        assert_eq!(format_relative_time(Some(0), NOW), "Nunca sincronizado");
        assert_eq!(format_relative_time(Some(NOW - 30_000), NOW), "Ahora mismo");
    }

    #[test]
    fn tiempo_relativo_division_truncada() {
        assert_eq!(
            format_relative_time(Some(NOW - 5 * 60_000), NOW),
            "hace 5 minutos"
        );
        // 90 minutos: piso de horas, sin promoción de unidad
        assert_eq!(
            format_relative_time(Some(NOW - 90 * 60_000), NOW),
            "hace 1 horas"
        );
        assert_eq!(
            format_relative_time(Some(NOW - 48 * 3_600_000), NOW),
            "hace 2 días"
        );
        // 23h59m sigue en horas
        assert_eq!(
            format_relative_time(Some(NOW - (24 * 3_600_000 - 60_000)), NOW),
            "hace 23 horas"
        );
    }

    #[test]
    fn tiempo_relativo_futuro_se_trata_como_ahora() {
        // Relojes desincronizados: un last_sync en el futuro no revienta
        assert_eq!(format_relative_time(Some(NOW + 60_000), NOW), "Ahora mismo");
    }
}
