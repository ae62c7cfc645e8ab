// ── Draft validation ──
//
// Caller-side checks run by the view before a command is issued. The store
// itself never validates.

use crate::error::CoreError;
use crate::model::{PostDraft, PostPatch};

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_BODY_LEN: usize = 10;

/// Check a create/update draft and return it with title and body trimmed.
pub fn validate_draft(draft: &PostDraft) -> Result<PostDraft, CoreError> {
    let title = check_title(&draft.title)?;
    let body = check_body(&draft.body)?;
    check_user_id(draft.user_id)?;

    Ok(PostDraft {
        title,
        body,
        user_id: draft.user_id,
    })
}

/// Check the fields a patch sets. An empty patch is rejected.
pub fn validate_patch(patch: &PostPatch) -> Result<PostPatch, CoreError> {
    if patch.is_empty() {
        return Err(CoreError::validation(
            "patch",
            "at least one of title, body, or user id must be set",
        ));
    }

    let title = patch.title.as_deref().map(check_title).transpose()?;
    let body = patch.body.as_deref().map(check_body).transpose()?;
    if let Some(user_id) = patch.user_id {
        check_user_id(user_id)?;
    }

    Ok(PostPatch {
        title,
        body,
        user_id: patch.user_id,
    })
}

fn check_title(raw: &str) -> Result<String, CoreError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CoreError::validation("title", "title is required"));
    }
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(CoreError::validation(
            "title",
            format!("title must be at least {MIN_TITLE_LEN} characters"),
        ));
    }
    Ok(title.to_owned())
}

fn check_body(raw: &str) -> Result<String, CoreError> {
    let body = raw.trim();
    if body.is_empty() {
        return Err(CoreError::validation("body", "body is required"));
    }
    if body.chars().count() < MIN_BODY_LEN {
        return Err(CoreError::validation(
            "body",
            format!("body must be at least {MIN_BODY_LEN} characters"),
        ));
    }
    Ok(body.to_owned())
}

fn check_user_id(user_id: u64) -> Result<(), CoreError> {
    if user_id == 0 {
        return Err(CoreError::validation("user id", "user id must be at least 1"));
    }
    Ok(())
}
