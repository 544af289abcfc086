pub mod app;
pub mod header;
pub mod settings_menu;
pub mod sync_status_badge;

pub use app::App;
pub use header::Header;
pub use settings_menu::SettingsMenu;
pub use sync_status_badge::SyncStatusBadge;
