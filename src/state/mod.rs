pub mod sync_state;
pub mod wake_lock;

pub use sync_state::ChartSyncState;
pub use wake_lock::{WakeLockLedger, WakeLockStep};
