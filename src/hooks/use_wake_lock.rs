// ============================================================================
// USE WAKE LOCK - Mantener la pantalla encendida mientras se toca
// ============================================================================
// Pega la máquina de estados pura (state/wake_lock.rs) a la Screen Wake Lock
// API del navegador. Todas las decisiones de carrera viven en el ledger; aquí
// solo hay awaits contra la plataforma y suscripciones con ámbito.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{VisibilityState, WakeLockSentinel, WakeLockType};
use yew::prelude::*;

use crate::state::{WakeLockLedger, WakeLockStep};

#[derive(Clone, PartialEq)]
pub struct UseWakeLockHandle {
    /// Hay un sentinel en mano ahora mismo
    pub is_active: bool,
    /// La plataforma expone la API (se sondea UNA vez, al montar)
    pub is_supported: bool,
    pub request_wake_lock: Callback<()>,
    pub release_wake_lock: Callback<()>,
    pub toggle_wake_lock: Callback<()>,
}

/// Sentinel en mano junto con su suscripción al evento "release": al soltar
/// el par, el listener se da de baja solo.
struct HeldLock {
    sentinel: WakeLockSentinel,
    _on_release: EventListener,
}

#[hook]
pub fn use_wake_lock() -> UseWakeLockHandle {
    let is_supported = *use_memo((), |_| wake_lock_supported());
    let is_active = use_state(|| false);
    let ledger = use_mut_ref(WakeLockLedger::default);
    let slot = use_mut_ref(|| None::<HeldLock>);
    let busy = use_mut_ref(|| false);

    let request_wake_lock = {
        let ledger = ledger.clone();
        let slot = slot.clone();
        let busy = busy.clone();
        let is_active = is_active.clone();
        Callback::from(move |_| {
            // Sin soporte no es un error: simplemente no hay nada que pedir
            if !is_supported {
                return;
            }
            ledger.borrow_mut().request();
            spawn_local(reconcile(
                ledger.clone(),
                slot.clone(),
                busy.clone(),
                is_active.clone(),
            ));
        })
    };

    let release_wake_lock = {
        let ledger = ledger.clone();
        let slot = slot.clone();
        let busy = busy.clone();
        let is_active = is_active.clone();
        Callback::from(move |_| {
            if !is_supported {
                return;
            }
            ledger.borrow_mut().release();
            spawn_local(reconcile(
                ledger.clone(),
                slot.clone(),
                busy.clone(),
                is_active.clone(),
            ));
        })
    };

    let toggle_wake_lock = {
        let ledger = ledger.clone();
        let slot = slot.clone();
        let busy = busy.clone();
        let is_active = is_active.clone();
        Callback::from(move |_| {
            if !is_supported {
                return;
            }
            // La intención se invierte YA, de forma síncrona; el
            // reconciliador la alcanzará aunque haya awaits en vuelo
            ledger.borrow_mut().toggle();
            spawn_local(reconcile(
                ledger.clone(),
                slot.clone(),
                busy.clone(),
                is_active.clone(),
            ));
        })
    };

    // Re-adquirir al volver a ser visible + limpieza al desmontar
    {
        let ledger = ledger.clone();
        let slot = slot.clone();
        let busy = busy.clone();
        let is_active = is_active.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                let ledger = ledger.clone();
                let slot = slot.clone();
                let busy = busy.clone();
                let is_active = is_active.clone();
                EventListener::new(&document, "visibilitychange", move |_| {
                    let visible = web_sys::window()
                        .and_then(|w| w.document())
                        .map(|d| d.visibility_state() == VisibilityState::Visible)
                        .unwrap_or(false);
                    let now = *ledger.borrow();
                    // Solo si la última intención era "activo" y el SO nos
                    // quitó el sentinel al ocultar la pestaña
                    if visible && now.wants_lock() && !now.is_active() {
                        log::info!("👁️ Página visible de nuevo, re-adquiriendo wake lock");
                        spawn_local(reconcile(
                            ledger.clone(),
                            slot.clone(),
                            busy.clone(),
                            is_active.clone(),
                        ));
                    }
                })
            });

            move || {
                drop(listener);
                // Mejor esfuerzo al desmontar: soltar sin esperar resultado
                if let Some(held) = slot.borrow_mut().take() {
                    let _ = held.sentinel.release();
                }
            }
        });
    }

    UseWakeLockHandle {
        is_active: *is_active,
        is_supported,
        request_wake_lock,
        release_wake_lock,
        toggle_wake_lock,
    }
}

/// Sondeo de capacidad, una única vez. `navigator.wakeLock` es un objeto
/// opcional: se pregunta por la propiedad, nunca se llama a ciegas.
fn wake_lock_supported() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(w.navigator().as_ref(), &JsValue::from_str("wakeLock"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Acerca el recurso a la intención del usuario. Reentra sin efecto si ya
/// hay un bucle en marcha: ese bucle releerá el ledger tras su await y
/// aplicará también los cambios que llegaron por el camino.
async fn reconcile(
    ledger: Rc<RefCell<WakeLockLedger>>,
    slot: Rc<RefCell<Option<HeldLock>>>,
    busy: Rc<RefCell<bool>>,
    is_active: UseStateHandle<bool>,
) {
    if *busy.borrow() {
        return;
    }
    *busy.borrow_mut() = true;

    loop {
        let step = ledger.borrow().next_step();
        match step {
            WakeLockStep::Acquire => match request_sentinel().await {
                Ok(sentinel) => {
                    let on_release = watch_platform_release(
                        &sentinel,
                        ledger.clone(),
                        slot.clone(),
                        is_active.clone(),
                    );
                    *slot.borrow_mut() = Some(HeldLock {
                        sentinel,
                        _on_release: on_release,
                    });
                    ledger.borrow_mut().acquired();
                    log::info!("🔆 Wake lock adquirido");
                }
                Err(e) => {
                    // Denegado o error de plataforma: terminal para este
                    // intento, silencioso de cara al usuario
                    log::warn!("⚠️ La plataforma rechazó el wake lock: {:?}", e);
                    ledger.borrow_mut().acquire_failed();
                }
            },
            WakeLockStep::Release => {
                let held = slot.borrow_mut().take();
                if let Some(held) = held {
                    if let Err(e) = JsFuture::from(held.sentinel.release()).await {
                        // El recurso se da por perdido igualmente
                        log::warn!("⚠️ Error liberando el wake lock: {:?}", e);
                    }
                }
                ledger.borrow_mut().lost();
                log::info!("🌙 Wake lock liberado");
            }
            WakeLockStep::Settled => break,
        }
    }

    *busy.borrow_mut() = false;
    is_active.set(ledger.borrow().is_active());
}

async fn request_sentinel() -> Result<WakeLockSentinel, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("sin window"))?;
    Ok(
        JsFuture::from(window.navigator().wake_lock().request(WakeLockType::Screen))
            .await?
            .unchecked_into::<WakeLockSentinel>(),
    )
}

/// El SO puede soltar el lock por su cuenta (pestaña oculta, ahorro de
/// batería). Se resincroniza `is_active` y se limpia el sentinel; la
/// intención del usuario queda registrada para re-adquirir al volver.
fn watch_platform_release(
    sentinel: &WakeLockSentinel,
    ledger: Rc<RefCell<WakeLockLedger>>,
    slot: Rc<RefCell<Option<HeldLock>>>,
    is_active: UseStateHandle<bool>,
) -> EventListener {
    EventListener::once(sentinel, "release", move |_| {
        let held = slot.borrow_mut().take();
        if held.is_some() {
            log::info!("🌙 Wake lock liberado por el sistema");
        }
        ledger.borrow_mut().lost();
        is_active.set(false);
        // `held` contiene este mismo listener: se suelta fuera del callback
        spawn_local(async move { drop(held) });
    })
}
