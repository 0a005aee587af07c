use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use notes_core::VERSION;

/// Notes - a local, flat-file note manager
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes file
    #[arg(short, long, global = true, env = "NOTES_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Note title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Category (defaults to "General")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Note body (overrides stdin/prompt)
    #[arg(long)]
    pub body: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only notes in this category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title (empty keeps the current one)
    #[arg(long)]
    pub title: Option<String>,

    /// New content (empty keeps the current one)
    #[arg(long)]
    pub content: Option<String>,

    /// New category (empty keeps the current one)
    #[arg(long)]
    pub category: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    Add(AddArgs),

    /// List notes
    List(ListArgs),

    /// Show a note by ID
    Show(ShowArgs),

    /// Update a note's title, content or category
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Run the interactive menu (default)
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
