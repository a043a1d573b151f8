//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::Utc;
use tokio::runtime::Builder;

use brief_assist::{Assistant, ChatMessage};
use brief_export::{snapshot, write_snapshot};
use brief_ingest::load_documents;
use brief_state::{Action, Session};
use brief_store::FsBackend;

use crate::cli::{
    AnnotateArgs, AnnotationsArgs, AskArgs, ExportArgs, ListArgs, ProgressArgs, TitleArg,
};
use crate::demo::demo_documents;
use crate::render::{print_annotations, print_document_detail, print_document_table};

/// Resolved environment for one command invocation.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub dataset: Option<PathBuf>,
}

/// Open a session over the resolved data directory and document source.
///
/// An import failure aborts the command before any state is touched; the
/// persisted user state on disk stays as it was.
fn open_session(ctx: &AppContext) -> anyhow::Result<Session<FsBackend>> {
    let documents = match &ctx.dataset {
        Some(path) => load_documents(path)
            .with_context(|| format!("import failed for {}", path.display()))?,
        None => demo_documents(),
    };

    let mut session = Session::new(FsBackend::new(&ctx.data_dir));
    session
        .load_documents(documents)
        .context("dataset failed validation")?;
    Ok(session)
}

/// Bail when a title is not in the loaded set; mutations from the CLI
/// only target documents the user can see.
fn require_document(session: &Session<FsBackend>, title: &str) -> anyhow::Result<()> {
    if session.library().get(title).is_none() {
        bail!("unknown document: {title}");
    }
    Ok(())
}

pub fn run_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;

    session.apply(Action::SetPriorityFilter(args.priority.map(Into::into)))?;
    session.apply(Action::SetAudienceFilter(args.audience.clone()))?;
    session.apply(Action::SetBookmarkedOnly(args.bookmarked))?;
    session.apply(Action::SetInProgressOnly(args.in_progress))?;
    session.apply(Action::SetSearch(args.search.clone().unwrap_or_default()))?;

    let filtered = session.filtered();
    if filtered.is_empty() {
        println!("No documents match your filters");
        return Ok(());
    }

    let workbench = session.workbench();
    print_document_table(
        &filtered,
        |title| workbench.is_bookmarked(title),
        |title| workbench.progress(title),
    );
    Ok(())
}

pub fn run_show(ctx: &AppContext, args: &TitleArg) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    session.apply(Action::SelectDocument(Some(args.title.clone())))?;

    let Some(doc) = session.active() else {
        bail!("unknown document: {}", args.title);
    };
    print_document_detail(
        doc,
        session.workbench().progress(&doc.title),
        session.workbench().annotations(&doc.title),
    );
    Ok(())
}

pub fn run_audiences(ctx: &AppContext) -> anyhow::Result<()> {
    let session = open_session(ctx)?;
    for label in session.library().audience_index() {
        println!("{label}");
    }
    Ok(())
}

pub fn run_bookmark(ctx: &AppContext, args: &TitleArg) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    require_document(&session, &args.title)?;

    session.apply(Action::ToggleBookmark(args.title.clone()))?;
    if session.workbench().is_bookmarked(&args.title) {
        println!("Bookmarked \"{}\"", args.title);
    } else {
        println!("Removed bookmark for \"{}\"", args.title);
    }
    Ok(())
}

pub fn run_progress(ctx: &AppContext, args: &ProgressArgs) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    require_document(&session, &args.title)?;

    session.apply(Action::SetProgress {
        title: args.title.clone(),
        value: args.value,
    })?;
    println!(
        "Reading progress for \"{}\" is now {}%",
        args.title,
        session.workbench().progress(&args.title)
    );
    Ok(())
}

pub fn run_open(ctx: &AppContext, args: &TitleArg) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    require_document(&session, &args.title)?;

    session.apply(Action::OpenExternally(args.title.clone()))?;
    println!("Opening \"{}\" externally...", args.title);
    println!(
        "Reading progress is now {}%",
        session.workbench().progress(&args.title)
    );
    Ok(())
}

pub fn run_annotate(ctx: &AppContext, args: &AnnotateArgs) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    require_document(&session, &args.title)?;

    session.apply(Action::AddAnnotation {
        title: args.title.clone(),
        text: args.text.clone(),
        author: args.author.clone(),
    })?;
    match session.workbench().annotations(&args.title).last() {
        Some(annotation) => println!(
            "Added annotation {} to \"{}\"",
            annotation.id, args.title
        ),
        None => bail!("annotation was not recorded"),
    }
    Ok(())
}

pub fn run_annotations(ctx: &AppContext, args: &AnnotationsArgs) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    require_document(&session, &args.title)?;

    if let Some(id) = args.delete {
        let existed = session
            .workbench()
            .annotations(&args.title)
            .iter()
            .any(|a| a.id == id);
        session.apply(Action::DeleteAnnotation {
            title: args.title.clone(),
            id,
        })?;
        if existed {
            println!("Deleted annotation {id}");
        } else {
            println!("No annotation {id} on \"{}\"", args.title);
        }
        return Ok(());
    }

    let annotations = session.workbench().annotations(&args.title);
    if annotations.is_empty() {
        println!("No annotations on \"{}\"", args.title);
    } else {
        print_annotations(annotations);
    }
    Ok(())
}

pub fn run_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let session = open_session(ctx)?;
    let Some(doc) = session.library().get(&args.title) else {
        bail!("unknown document: {}", args.title);
    };

    let snap = snapshot(
        doc,
        session.workbench().progress(&doc.title),
        session.workbench().annotations(&doc.title),
        Utc::now(),
    );
    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = write_snapshot(&output_dir, &snap)?;
    println!("Exported \"{}\" to {}", args.title, path.display());
    Ok(())
}

pub fn run_ask(ctx: &AppContext, args: &AskArgs) -> anyhow::Result<()> {
    let mut session = open_session(ctx)?;
    session.apply(Action::AppendChat(ChatMessage::user(&args.query)))?;

    let runtime = Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start assistant runtime")?;

    let documents = session.library().documents().to_vec();
    let delay = std::time::Duration::from_millis(args.delay_ms);
    let reply = runtime.block_on(async move {
        let mut handle = Assistant::new(documents).with_delay(delay).spawn();
        if !handle.ask(&args.query) {
            return None;
        }
        handle.next_reply().await
    });

    let Some(reply) = reply else {
        bail!("assistant did not reply");
    };
    session.apply(Action::AppendChat(ChatMessage::assistant(&reply)))?;

    println!("You: {}", args.query);
    println!("Assistant: {reply}");
    Ok(())
}
