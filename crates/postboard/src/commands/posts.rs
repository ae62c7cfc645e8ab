//! Post command handlers.

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use postboard_core::{
    Post, PostDraft, PostPatch, PostQuery, PostStore, PostsApi, SortKey, SortOrder, StoreState,
    validate_draft, validate_patch,
};

use crate::cli::{ListArgs, PostsArgs, PostsCommand, SortDirection, SortField};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

const TITLE_WIDTH: usize = 60;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "User")]
    user_id: u64,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&Post> for PostRow {
    fn from(p: &Post) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            title: truncate(&p.title, TITLE_WIDTH),
        }
    }
}

#[derive(Serialize)]
struct UserSummary {
    user_id: u64,
    posts: usize,
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "User")]
    user_id: u64,
    #[tabled(rename = "Posts")]
    posts: usize,
}

fn detail(p: &Post) -> String {
    [
        format!("ID:     {}", p.id),
        format!("User:   {}", p.user_id),
        format!("Title:  {}", p.title),
        String::new(),
        p.body.clone(),
    ]
    .join("\n")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

impl From<ListArgs> for PostQuery {
    fn from(args: ListArgs) -> Self {
        Self {
            search: args.search,
            user_id: args.user,
            sort_by: match args.sort {
                SortField::Id => SortKey::Id,
                SortField::Title => SortKey::Title,
                SortField::UserId => SortKey::UserId,
            },
            order: match args.order {
                SortDirection::Asc => SortOrder::Asc,
                SortDirection::Desc => SortOrder::Desc,
            },
        }
    }
}

/// Count posts per author, ascending by user id.
fn summarize_users(state: &StoreState) -> Vec<UserSummary> {
    postboard_core::user_ids(&state.items)
        .into_iter()
        .map(|user_id| UserSummary {
            user_id,
            posts: state.items.iter().filter(|p| p.user_id == user_id).count(),
        })
        .collect()
}

fn render_post(post: &Post, settings: &Settings) -> Result<(), CliError> {
    let out = output::render_single(settings.output, post, detail, |p| p.id.to_string())?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle<C: PostsApi>(
    store: &PostStore<C>,
    args: PostsArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    match args.command {
        PostsCommand::List(list) => {
            let limit = list.limit;
            let query = PostQuery::from(list);

            let spinner = util::spinner("Fetching posts…", settings.quiet);
            let fetched = store.list().await;
            spinner.finish_and_clear();
            fetched?;

            let snap = store.snapshot();
            let mut shown: Vec<Post> = query.apply(&snap.items).into_iter().cloned().collect();
            if let Some(limit) = limit {
                shown.truncate(limit);
            }
            debug!(total = snap.items.len(), shown = shown.len(), "rendering post list");

            let out = output::render_list(
                settings.output,
                &shown,
                |p| PostRow::from(p),
                |p| p.id.to_string(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        PostsCommand::Get { id } => {
            let spinner = util::spinner("Fetching post…", settings.quiet);
            let fetched = store.get(id).await;
            spinner.finish_and_clear();

            render_post(&fetched?, settings)
        }

        PostsCommand::Create {
            title,
            body,
            user_id,
        } => {
            let draft = validate_draft(&PostDraft::new(title, body, user_id))?;

            let spinner = util::spinner("Creating post…", settings.quiet);
            let created = store.create(&draft).await;
            spinner.finish_and_clear();
            let created = created?;

            output::notice(
                &format!("Post {} created", created.id),
                settings.color,
                settings.quiet,
            );
            render_post(&created, settings)
        }

        PostsCommand::Update {
            id,
            title,
            body,
            user_id,
        } => {
            // Keep the current author unless one was given.
            let user_id = match user_id {
                Some(uid) => uid,
                None => store.get(id).await?.user_id,
            };
            let draft = validate_draft(&PostDraft::new(title, body, user_id))?;

            let spinner = util::spinner("Updating post…", settings.quiet);
            let updated = store.update(id, &draft).await;
            spinner.finish_and_clear();
            let updated = updated?;

            output::notice(
                &format!("Post {id} updated"),
                settings.color,
                settings.quiet,
            );
            render_post(&updated, settings)
        }

        PostsCommand::Patch {
            id,
            title,
            body,
            user_id,
        } => {
            let patch = validate_patch(&PostPatch {
                title,
                body,
                user_id,
            })?;

            let spinner = util::spinner("Updating post…", settings.quiet);
            let patched = store.patch(id, &patch).await;
            spinner.finish_and_clear();
            let patched = patched?;

            output::notice(
                &format!("Post {id} updated"),
                settings.color,
                settings.quiet,
            );
            render_post(&patched, settings)
        }

        PostsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete post {id}?"), "posts delete", settings.yes)? {
                return Ok(());
            }

            let spinner = util::spinner("Deleting post…", settings.quiet);
            let deleted = store.delete(id).await;
            spinner.finish_and_clear();
            deleted?;

            output::notice(
                &format!("Post {id} deleted"),
                settings.color,
                settings.quiet,
            );
            Ok(())
        }

        PostsCommand::Users => {
            let spinner = util::spinner("Fetching posts…", settings.quiet);
            let fetched = store.list().await;
            spinner.finish_and_clear();
            fetched?;

            let users = summarize_users(&store.snapshot());
            let out = output::render_list(
                settings.output,
                &users,
                |u| UserRow {
                    user_id: u.user_id,
                    posts: u.posts,
                },
                |u| u.user_id.to_string(),
            )?;
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
