// ── Post store ──
//
// Owns the snapshot and the resource client. Every command runs as
// pending → fulfilled | rejected, each phase one atomic `send_modify`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::state::{Action, Operation, StoreState};
use crate::api::PostsApi;
use crate::error::CoreError;
use crate::model::{Post, PostDraft, PostPatch};
use crate::stream::StateStream;

/// Client-side cache of the remote post collection.
///
/// Commands take `&self`, so several may be in flight at once (e.g. via
/// `tokio::join!`). Each settles independently against whatever state is
/// current when its response arrives; there is no cancellation and no
/// reordering. An update that lands after a delete of the same id finds
/// nothing to replace and leaves the post absent.
///
/// Each command also returns its own outcome so the caller can report
/// success or failure; the snapshot is updated either way.
pub struct PostStore<C> {
    api: C,
    state: watch::Sender<Arc<StoreState>>,
}

impl<C: PostsApi> PostStore<C> {
    pub fn new(api: C) -> Self {
        let (state, _) = watch::channel(Arc::new(StoreState::default()));
        Self { api, state }
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    // ── Read surface ─────────────────────────────────────────────────

    /// The current snapshot. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<StoreState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.state.subscribe())
    }

    pub fn items(&self) -> Vec<Post> {
        self.state.borrow().items.clone()
    }

    pub fn selected(&self) -> Option<Post> {
        self.state.borrow().selected.clone()
    }

    pub fn error(&self) -> Option<CoreError> {
        self.state.borrow().error.clone()
    }

    pub fn is_loading(&self, op: Operation) -> bool {
        self.state.borrow().is_loading(op)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace `items` with the server's collection.
    pub async fn list(&self) -> Result<Vec<Post>, CoreError> {
        self.dispatch(Action::Pending(Operation::List));
        match self.api.list_posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "posts listed");
                self.dispatch(Action::ListFulfilled(posts.clone()));
                Ok(posts)
            }
            Err(e) => Err(self.reject(Operation::List, e.into())),
        }
    }

    /// Fetch one post into `selected`. `items` is not touched.
    pub async fn get(&self, id: u64) -> Result<Post, CoreError> {
        self.dispatch(Action::Pending(Operation::FetchById));
        match self.api.get_post(id).await {
            Ok(post) => {
                debug!(id, "post fetched");
                self.dispatch(Action::FetchFulfilled(post.clone()));
                Ok(post)
            }
            Err(e) => Err(self.reject(Operation::FetchById, e.into())),
        }
    }

    /// Create a post and put it at the front of `items`.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post, CoreError> {
        self.dispatch(Action::Pending(Operation::Create));
        match self.api.create_post(draft).await {
            Ok(post) => {
                debug!(id = post.id, "post created");
                self.dispatch(Action::CreateFulfilled(post.clone()));
                Ok(post)
            }
            Err(e) => Err(self.reject(Operation::Create, e.into())),
        }
    }

    /// Replace post `id` with `draft`, in place.
    pub async fn update(&self, id: u64, draft: &PostDraft) -> Result<Post, CoreError> {
        self.dispatch(Action::Pending(Operation::Update));
        match self.api.update_post(id, draft).await {
            Ok(post) => Ok(self.settle_update(post)),
            Err(e) => Err(self.reject(Operation::Update, e.into())),
        }
    }

    /// Partial update. Shares the `update` loading flag.
    pub async fn patch(&self, id: u64, patch: &PostPatch) -> Result<Post, CoreError> {
        self.dispatch(Action::Pending(Operation::Update));
        match self.api.patch_post(id, patch).await {
            Ok(post) => Ok(self.settle_update(post)),
            Err(e) => Err(self.reject(Operation::Update, e.into())),
        }
    }

    /// Delete post `id` remotely, then drop it from `items` and `selected`.
    pub async fn delete(&self, id: u64) -> Result<(), CoreError> {
        self.dispatch(Action::Pending(Operation::Delete));
        match self.api.delete_post(id).await {
            Ok(()) => {
                debug!(id, "post deleted");
                self.dispatch(Action::DeleteFulfilled(id));
                Ok(())
            }
            Err(e) => Err(self.reject(Operation::Delete, e.into())),
        }
    }

    // ── Synchronous mutations ────────────────────────────────────────

    pub fn clear_error(&self) {
        self.dispatch(Action::ClearError);
    }

    pub fn set_selected(&self, post: Option<Post>) {
        self.dispatch(Action::SetSelected(post));
    }

    pub fn clear_selected(&self) {
        self.dispatch(Action::SetSelected(None));
    }

    // ── Internals ────────────────────────────────────────────────────

    fn settle_update(&self, post: Post) -> Post {
        if self.state.borrow().find(post.id).is_some() {
            debug!(id = post.id, "post updated");
        } else {
            debug!(id = post.id, "updated post is not cached; items unchanged");
        }
        self.dispatch(Action::UpdateFulfilled(post.clone()));
        post
    }

    fn reject(&self, op: Operation, err: CoreError) -> CoreError {
        warn!(operation = %op, kind = %err.kind(), error = %err, "command failed");
        self.dispatch(Action::Rejected(op, err.clone()));
        err
    }

    fn dispatch(&self, action: Action) {
        self.state.send_modify(|state| Arc::make_mut(state).apply(action));
    }
}

