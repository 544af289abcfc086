use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::{SyncProjection, SyncSnapshot};
use crate::utils::RELATIVE_TIME_REFRESH_MS;

/// Proyecta la foto del subsistema de sincronización al estado que pinta la
/// cabecera. Devuelve `None` sin sesión autenticada. Un intervalo interno
/// re-proyecta cada medio minuto para que "hace N minutos" no se quede
/// congelado entre renders.
#[hook]
pub fn use_sync_status(snapshot: &SyncSnapshot) -> Option<SyncProjection> {
    let tick = use_state(|| 0u32);

    {
        let tick = tick.clone();
        use_effect_with((), move |_| {
            // El handle capturado no ve renders posteriores: contador local
            let mut n = 0u32;
            let interval = Interval::new(RELATIVE_TIME_REFRESH_MS, move || {
                n += 1;
                tick.set(n);
            });
            move || drop(interval)
        });
    }

    let _ = *tick; // dependencia del render sobre el intervalo
    snapshot.project(chrono::Utc::now().timestamp_millis())
}
