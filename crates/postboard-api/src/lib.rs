//! Async client for a single JSON "posts" collection resource.
//!
//! - **[`PostsClient`]** issues the list / get / create / update / patch /
//!   delete exchanges against one collection URL and decodes every response
//!   into the explicit [`Post`] schema.
//! - **[`IdGenerator`]** synthesizes stable keys for created posts, since the
//!   demo backend echoes a throwaway id on `POST`.
//! - **[`Error`]** is the uniform failure value: transport, HTTP status,
//!   not-found, and decode failures.

pub mod client;
pub mod error;
pub mod ids;
pub mod models;
pub mod transport;

pub use client::PostsClient;
pub use error::Error;
pub use ids::{IdGenerator, SequentialIds, TimestampIds};
pub use models::{Post, PostDraft, PostPatch};
pub use transport::TransportConfig;
