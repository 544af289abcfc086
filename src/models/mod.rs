pub mod flags;
pub mod sync;

pub use flags::FeatureFlags;
pub use sync::{format_relative_time, SyncProjection, SyncSnapshot, SyncStatus};
