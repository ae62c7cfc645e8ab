// ── Post store ──
//
// Single-source-of-truth cache of posts with push-based change notification.

mod post_store;
mod state;

pub use post_store::PostStore;
pub use state::{Operation, OperationLoading, StoreState};
