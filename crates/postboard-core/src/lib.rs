//! State layer between `postboard-api` and view consumers (the CLI).
//!
//! - **[`PostStore`]**: owns the post list, the selected post, and the
//!   per-operation loading/error state. Each command (list, get, create,
//!   update, patch, delete) runs as a pending → fulfilled/rejected
//!   transition applied atomically to a `watch`-published snapshot.
//!
//! - **[`StoreState`]**: the read-only snapshot views render from.
//!
//! - **[`StateStream`]**: subscription handle exposing `current()` /
//!   `latest()` / `changed()` / `wait_for()` and a `WatchStream`.
//!
//! - **[`PostQuery`]**: client-side search, user filter, and sorting over a
//!   snapshot's items. Never touches store state.
//!
//! - **[`CoreError`]**: tagged error kept in the snapshot so views can
//!   branch on [`ErrorKind`] while still showing a message.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::PostsApi;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{CoreError, ErrorKind};
pub use model::{Post, PostDraft, PostPatch, validate_draft, validate_patch};
pub use query::{PostQuery, SortKey, SortOrder, user_ids};
pub use store::{Operation, OperationLoading, PostStore, StoreState};
pub use stream::StateStream;
