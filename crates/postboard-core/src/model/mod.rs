// ── Domain model ──
//
// The wire types from `postboard-api` are already the canonical shape of a
// post, so they are re-exported as-is. Draft validation lives alongside.

mod validate;

pub use postboard_api::{Post, PostDraft, PostPatch};
pub use validate::{MIN_BODY_LEN, MIN_TITLE_LEN, validate_draft, validate_patch};
