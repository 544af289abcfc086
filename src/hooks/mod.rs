pub mod use_click_outside;
pub mod use_feature_flags;
pub mod use_sync_status;
pub mod use_wake_lock;

pub use use_click_outside::use_click_outside;
pub use use_feature_flags::use_feature_flags;
pub use use_sync_status::use_sync_status;
pub use use_wake_lock::{use_wake_lock, UseWakeLockHandle};
