// ── Wire models for the posts resource ──
//
// Field names follow the remote JSON (`userId`); Rust code sees snake_case.

use serde::{Deserialize, Serialize};

/// A post record. Identity is `id`; every other field is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Body of a create or full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            user_id: post.user_id,
        }
    }
}

/// Partial update; only the `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.user_id.is_none()
    }

    /// Apply the patch on top of an existing post.
    pub fn apply_to(&self, post: &Post) -> Post {
        Post {
            id: post.id,
            title: self.title.clone().unwrap_or_else(|| post.title.clone()),
            body: self.body.clone().unwrap_or_else(|| post.body.clone()),
            user_id: self.user_id.unwrap_or(post.user_id),
        }
    }
}

/// Echo returned by write endpoints. The id may be missing or meaningless.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostEcho {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl PostEcho {
    pub(crate) fn into_post(self, id: u64) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        }
    }
}
