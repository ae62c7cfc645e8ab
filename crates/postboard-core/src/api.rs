// ── Resource seam ──
//
// The store talks to the remote collection through this trait so tests can
// script responses and control when each call resolves.

use std::future::Future;
use std::sync::Arc;

use postboard_api::{Error, PostsClient};

use crate::model::{Post, PostDraft, PostPatch};

/// The five CRUD exchanges (plus PATCH) the store needs from a backend.
pub trait PostsApi: Send + Sync {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, Error>> + Send;

    fn get_post(&self, id: u64) -> impl Future<Output = Result<Post, Error>> + Send;

    fn create_post(&self, draft: &PostDraft) -> impl Future<Output = Result<Post, Error>> + Send;

    fn update_post(
        &self,
        id: u64,
        draft: &PostDraft,
    ) -> impl Future<Output = Result<Post, Error>> + Send;

    fn patch_post(
        &self,
        id: u64,
        patch: &PostPatch,
    ) -> impl Future<Output = Result<Post, Error>> + Send;

    fn delete_post(&self, id: u64) -> impl Future<Output = Result<(), Error>> + Send;
}

impl PostsApi for PostsClient {
    async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        PostsClient::list_posts(self).await
    }

    async fn get_post(&self, id: u64) -> Result<Post, Error> {
        PostsClient::get_post(self, id).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, Error> {
        PostsClient::create_post(self, draft).await
    }

    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, Error> {
        PostsClient::update_post(self, id, draft).await
    }

    async fn patch_post(&self, id: u64, patch: &PostPatch) -> Result<Post, Error> {
        PostsClient::patch_post(self, id, patch).await
    }

    async fn delete_post(&self, id: u64) -> Result<(), Error> {
        PostsClient::delete_post(self, id).await
    }
}

impl<T: PostsApi> PostsApi for Arc<T> {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, Error>> + Send {
        (**self).list_posts()
    }

    fn get_post(&self, id: u64) -> impl Future<Output = Result<Post, Error>> + Send {
        (**self).get_post(id)
    }

    fn create_post(&self, draft: &PostDraft) -> impl Future<Output = Result<Post, Error>> + Send {
        (**self).create_post(draft)
    }

    fn update_post(
        &self,
        id: u64,
        draft: &PostDraft,
    ) -> impl Future<Output = Result<Post, Error>> + Send {
        (**self).update_post(id, draft)
    }

    fn patch_post(
        &self,
        id: u64,
        patch: &PostPatch,
    ) -> impl Future<Output = Result<Post, Error>> + Send {
        (**self).patch_post(id, patch)
    }

    fn delete_post(&self, id: u64) -> impl Future<Output = Result<(), Error>> + Send {
        (**self).delete_post(id)
    }
}
