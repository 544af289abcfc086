mod components;
mod hooks;
mod models;
mod state;
mod utils;

use components::App;

fn main() {
    // Panic hook para stacktraces legibles en la consola del navegador
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🎸 Chord Charts iniciando...");

    yew::Renderer::<App>::new().render();
}
