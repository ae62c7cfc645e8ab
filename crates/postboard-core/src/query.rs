// ── Client-side list queries ──
//
// Search, user filter, and sort over a snapshot's items. Purely a view
// concern: queries borrow the items and never feed back into the store.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::model::Post;

/// Column a post list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Id,
    Title,
    UserId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filter and ordering applied to a list of posts.
///
/// The default matches everything and lists newest ids first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Case-insensitive substring matched against title or body.
    pub search: Option<String>,
    pub user_id: Option<u64>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl PostQuery {
    pub fn matches(&self, post: &Post) -> bool {
        if self.user_id.is_some_and(|uid| post.user_id != uid) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.body.to_lowercase().contains(&needle)
            }
        }
    }

    /// Matching posts in query order. Ties keep their input order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        let mut out: Vec<&Post> = posts.iter().filter(|p| self.matches(p)).collect();
        out.sort_by(|a, b| {
            let ord = self.compare(a, b);
            match self.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        out
    }

    fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self.sort_by {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::UserId => a.user_id.cmp(&b.user_id),
        }
    }
}

/// Distinct author ids, ascending.
pub fn user_ids(posts: &[Post]) -> Vec<u64> {
    posts
        .iter()
        .map(|p| p.user_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
