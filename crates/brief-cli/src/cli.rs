//! CLI argument definitions for briefdesk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use brief_model::Priority;

#[derive(Parser)]
#[command(
    name = "briefdesk",
    version,
    about = "Briefing Desk - local-first document briefing dashboard",
    long_about = "Browse, filter, and search a briefing document dataset, with\n\
                  bookmarks, reading progress, and annotations persisted locally.\n\
                  Imports any CSV matching the briefing dataset schema; falls back\n\
                  to the embedded demo dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory for persisted user state (default: BRIEFDESK_DATA_DIR,
    /// then the platform data directory).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Briefing dataset CSV to load (default: BRIEFDESK_DATASET, then the
    /// embedded demo dataset).
    #[arg(long = "dataset", value_name = "PATH", global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List documents, optionally filtered.
    List(ListArgs),

    /// Show one document in full, with progress and annotations.
    Show(TitleArg),

    /// List the distinct audience labels across the dataset.
    Audiences,

    /// Toggle a document's bookmark.
    Bookmark(TitleArg),

    /// Set reading progress for a document (0-100, clamped).
    Progress(ProgressArgs),

    /// Open a document externally (simulated); raises progress to at least 10%.
    Open(TitleArg),

    /// Add an annotation to a document.
    Annotate(AnnotateArgs),

    /// List a document's annotations, or delete one by id.
    Annotations(AnnotationsArgs),

    /// Export a document's metadata snapshot as JSON.
    Export(ExportArgs),

    /// Ask the assistant about the loaded documents.
    Ask(AskArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Keep only documents with this priority.
    #[arg(long = "priority", value_enum)]
    pub priority: Option<PriorityArg>,

    /// Keep only documents addressed to this audience label.
    #[arg(long = "audience", value_name = "LABEL")]
    pub audience: Option<String>,

    /// Keep only bookmarked documents.
    #[arg(long = "bookmarked")]
    pub bookmarked: bool,

    /// Keep only documents with progress strictly between 0 and 100.
    #[arg(long = "in-progress")]
    pub in_progress: bool,

    /// Case-insensitive substring over title, summary, and key takeaway.
    #[arg(long = "search", value_name = "QUERY")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct TitleArg {
    /// Document title (the dataset's File Name column).
    #[arg(value_name = "TITLE")]
    pub title: String,
}

#[derive(Parser)]
pub struct ProgressArgs {
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// New progress value; values outside 0-100 are clamped.
    #[arg(value_name = "PERCENT", allow_negative_numbers = true)]
    pub value: i64,
}

#[derive(Parser)]
pub struct AnnotateArgs {
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Annotation text.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Annotation author.
    #[arg(long = "author", default_value = "Current User")]
    pub author: String,
}

#[derive(Parser)]
pub struct AnnotationsArgs {
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Delete the annotation with this id instead of listing.
    #[arg(long = "delete", value_name = "ID")]
    pub delete: Option<i64>,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Directory for the exported artifact (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AskArgs {
    /// Free-text query.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Simulated assistant reply delay in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 1000)]
    pub delay_ms: u64,
}

/// CLI priority choices (only the values a filter can select on).
#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Critical,
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Critical => Priority::Critical,
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
