// ── Snapshot state and its transitions ──
//
// `StoreState` is what views render. `Action` is every way it can change;
// `apply` is the only code that mutates it.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::model::Post;

/// The store commands that carry loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    List,
    FetchById,
    Create,
    Update,
    Delete,
}

/// One in-flight flag per operation kind.
///
/// Flags are store-wide, not per post: two concurrent deletes share the
/// `delete` flag, and the first to settle clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationLoading {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
    pub fetch_by_id: bool,
}

impl OperationLoading {
    pub fn any(&self) -> bool {
        self.create || self.update || self.delete || self.fetch_by_id
    }
}

/// Observable store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    /// Newly created posts first, otherwise server order.
    pub items: Vec<Post>,
    pub selected: Option<Post>,
    /// True only while the bulk list fetch is in flight.
    pub global_loading: bool,
    /// Last failure; cleared when any command starts or on `clear_error`.
    pub error: Option<CoreError>,
    pub operation_loading: OperationLoading,
}

impl StoreState {
    pub fn is_loading(&self, op: Operation) -> bool {
        match op {
            Operation::List => self.global_loading,
            Operation::FetchById => self.operation_loading.fetch_by_id,
            Operation::Create => self.operation_loading.create,
            Operation::Update => self.operation_loading.update,
            Operation::Delete => self.operation_loading.delete,
        }
    }

    pub fn find(&self, id: u64) -> Option<&Post> {
        self.items.iter().find(|p| p.id == id)
    }

    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::Pending(op) => {
                self.set_loading(op, true);
                self.error = None;
            }
            Action::Rejected(op, err) => {
                self.set_loading(op, false);
                self.error = Some(err);
            }
            Action::ListFulfilled(posts) => {
                self.global_loading = false;
                self.items = dedup_by_id(posts);
            }
            Action::FetchFulfilled(post) => {
                self.operation_loading.fetch_by_id = false;
                self.selected = Some(post);
            }
            Action::CreateFulfilled(post) => {
                self.operation_loading.create = false;
                self.items.retain(|p| p.id != post.id);
                self.items.insert(0, post);
            }
            Action::UpdateFulfilled(post) => {
                self.operation_loading.update = false;
                if let Some(slot) = self.items.iter_mut().find(|p| p.id == post.id) {
                    slot.clone_from(&post);
                }
                if self.selected.as_ref().is_some_and(|s| s.id == post.id) {
                    self.selected = Some(post);
                }
            }
            Action::DeleteFulfilled(id) => {
                self.operation_loading.delete = false;
                self.items.retain(|p| p.id != id);
                if self.selected.as_ref().is_some_and(|s| s.id == id) {
                    self.selected = None;
                }
            }
            Action::ClearError => self.error = None,
            Action::SetSelected(post) => self.selected = post,
        }
    }

    fn set_loading(&mut self, op: Operation, value: bool) {
        match op {
            Operation::List => self.global_loading = value,
            Operation::FetchById => self.operation_loading.fetch_by_id = value,
            Operation::Create => self.operation_loading.create = value,
            Operation::Update => self.operation_loading.update = value,
            Operation::Delete => self.operation_loading.delete = value,
        }
    }
}

/// Every state transition the store can make.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    Pending(Operation),
    Rejected(Operation, CoreError),
    ListFulfilled(Vec<Post>),
    FetchFulfilled(Post),
    CreateFulfilled(Post),
    UpdateFulfilled(Post),
    DeleteFulfilled(u64),
    ClearError,
    SetSelected(Option<Post>),
}

/// Keep the first occurrence of each id.
fn dedup_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(posts.len());
    posts.into_iter().filter(|p| seen.insert(p.id)).collect()
}
