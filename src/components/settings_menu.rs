use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsMenuProps {
    pub active: bool,
    /// Solo con el flag `sync_settings` habilitado se montan las entradas
    /// relacionadas con sincronización
    pub show_sync_settings: bool,
    pub on_close: Callback<()>,
}

#[function_component(SettingsMenu)]
pub fn settings_menu(props: &SettingsMenuProps) -> Html {
    if !props.active {
        return html! {};
    }

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="settings-menu" onclick={stop}>
            <ul class="settings-items">
                <li><button class="settings-item" disabled={true}>{"Nuevo chart"}</button></li>
                <li><button class="settings-item" disabled={true}>{"Importar..."}</button></li>
                if props.show_sync_settings {
                    <>
                        <li class="settings-separator"></li>
                        <li><button class="settings-item" onclick={close_click}>{"Ajustes de sincronización"}</button></li>
                    </>
                }
            </ul>
        </div>
    }
}
