//! Clap derive structures for the `postboard` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// postboard -- browse and edit a remote posts collection
#[derive(Debug, Parser)]
#[command(
    name = "postboard",
    version,
    about = "Browse and edit a remote posts collection from the command line",
    long_about = "A CLI over a JSON posts REST resource (jsonplaceholder-style).\n\n\
        Fetches the collection into a local cache, then lists, searches,\n\
        creates, edits, and deletes posts against it.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Posts collection URL (overrides config)
    #[arg(long, short = 'u', env = "POSTBOARD_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "POSTBOARD_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "POSTBOARD_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List, view, and edit posts
    #[command(alias = "p")]
    Posts(PostsArgs),

    /// Start a session (required before any posts command)
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Posts ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PostsCommand {
    /// List posts, optionally searched, filtered, and sorted
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one post
    Get {
        /// Post ID
        id: u64,
    },

    /// Create a post
    Create {
        #[arg(long, short = 't')]
        title: String,

        #[arg(long, short = 'b')]
        body: String,

        /// Author's user ID
        #[arg(long, default_value = "1")]
        user_id: u64,
    },

    /// Replace a post's title, body, and author
    Update {
        /// Post ID
        id: u64,

        #[arg(long, short = 't')]
        title: String,

        #[arg(long, short = 'b')]
        body: String,

        /// Author's user ID [default: the post's current author]
        #[arg(long)]
        user_id: Option<u64>,
    },

    /// Change only the given fields of a post
    Patch {
        /// Post ID
        id: u64,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long, short = 'b')]
        body: Option<String>,

        #[arg(long)]
        user_id: Option<u64>,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Post ID
        id: u64,
    },

    /// List the distinct author IDs in the collection
    Users,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text to find in title or body
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only posts by this user ID
    #[arg(long)]
    pub user: Option<u64>,

    /// Sort column
    #[arg(long, value_enum, default_value = "id")]
    pub sort: SortField,

    /// Sort direction
    #[arg(long, value_enum, default_value = "desc")]
    pub order: SortDirection,

    /// Show at most this many posts
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Id,
    Title,
    UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

// ── Session ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(long)]
    pub username: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long, env = "POSTBOARD_PASSWORD", hide_env = true)]
    pub password: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard (defaults with --yes)
    Init,

    /// Display the current configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the posts collection URL
    SetUrl {
        /// Collection URL, e.g. https://jsonplaceholder.typicode.com/posts
        url: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
