use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Cierra "lo que sea" al interactuar fuera de su nodo raíz. El mismo
/// patrón sirve para el menú de ajustes y para el detalle de error de
/// sincronización; el listener solo existe mientras `active` sea true.
#[hook]
pub fn use_click_outside(node: NodeRef, active: bool, on_outside: Callback<()>) {
    use_effect_with((node, active, on_outside), move |(node, active, on_outside)| {
        let listener = if *active {
            web_sys::window().and_then(|w| w.document()).map(|document| {
                let node = node.clone();
                let on_outside = on_outside.clone();
                EventListener::new(&document, "mousedown", move |event| {
                    let target = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    let dentro = match (node.get(), target.as_ref()) {
                        (Some(raiz), Some(t)) => raiz.contains(Some(t)),
                        _ => false,
                    };
                    if !dentro {
                        on_outside.emit(());
                    }
                })
            })
        } else {
            None
        };
        move || drop(listener)
    });
}
