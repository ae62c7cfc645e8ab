//! Subscriptions to [`PostStore`](crate::PostStore) snapshots.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::StoreState;

/// Handle returned by `PostStore::subscribe`.
///
/// Snapshots are whole states: a subscriber never sees a half-applied
/// transition.
pub struct StateStream {
    seen: Arc<StoreState>,
    rx: watch::Receiver<Arc<StoreState>>,
}

impl StateStream {
    pub(crate) fn new(rx: watch::Receiver<Arc<StoreState>>) -> Self {
        let seen = rx.borrow().clone();
        Self { seen, rx }
    }

    /// Last snapshot this subscriber observed.
    pub fn current(&self) -> &Arc<StoreState> {
        &self.seen
    }

    /// Newest snapshot in the store, without marking it observed.
    pub fn latest(&self) -> Arc<StoreState> {
        self.rx.borrow().clone()
    }

    /// Next snapshot after the one last observed. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Arc<StoreState>> {
        self.rx.changed().await.ok()?;
        self.seen = self.rx.borrow_and_update().clone();
        Some(Arc::clone(&self.seen))
    }

    /// First snapshot (the newest included) satisfying `pred`.
    pub async fn wait_for(
        &mut self,
        mut pred: impl FnMut(&StoreState) -> bool,
    ) -> Option<Arc<StoreState>> {
        let snap = self.rx.wait_for(|s| pred(s)).await.ok()?.clone();
        self.seen = Arc::clone(&snap);
        Some(snap)
    }

    /// Stream of snapshots, starting with the newest. A slow consumer skips
    /// intermediate states.
    pub fn into_stream(self) -> WatchStream<Arc<StoreState>> {
        WatchStream::new(self.rx)
    }
}
