//! # Cardfile Client
//!
//! Terminal client for the Cardfile contact lookup. Searches contacts by
//! name through the proxy server and renders one card per match, each
//! annotated with birthday, age, and the member's subscription orders.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive prompt
//! cargo run -p cardfile-cli
//!
//! # One-shot search
//! cargo run -p cardfile-cli -- ann
//! ```

use cardfile_cli::client::{ApiDirectory, Directory};
use cardfile_cli::session::run_search;
use cardfile_cli::surface::{Surface, TerminalSurface};
use chrono::Local;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Search the contact directory and show membership orders
#[derive(Debug, Parser)]
#[command(name = "cardfile", version)]
struct Cli {
    /// Base URL of the Cardfile proxy server
    #[arg(long, default_value = "http://127.0.0.1:3001")]
    server: String,

    /// Run one search and exit instead of starting the interactive prompt
    #[arg(value_name = "NAME")]
    term: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardfile_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let directory: Arc<dyn Directory> = Arc::new(ApiDirectory::new(&cli.server)?);
    let surface: Arc<dyn Surface> = Arc::new(TerminalSurface::new());

    if let Some(term) = cli.term {
        let today = Local::now().date_naive();
        run_search(directory, surface, &term, today, CancellationToken::new()).await;
        return Ok(());
    }

    interactive(directory, surface).await
}

/// Interactive prompt loop.
///
/// Each submitted line starts a search; a new line cancels the previous
/// search's in-flight order fetches before anything else happens, so a
/// stale search can never write over newer cards. Blank input does
/// nothing.
async fn interactive(
    directory: Arc<dyn Directory>,
    surface: Arc<dyn Surface>,
) -> anyhow::Result<()> {
    println!("Type a name to search, or \"quit\" to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current: Option<(CancellationToken, JoinHandle<()>)> = None;

    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let term = line.trim().to_string();
        if term.eq_ignore_ascii_case("quit") || term.eq_ignore_ascii_case("exit") {
            break;
        }

        // Supersede the previous search before starting a new one
        if let Some((cancel, handle)) = current.take() {
            cancel.cancel();
            let _ = handle.await;
        }

        if term.is_empty() {
            continue;
        }

        let cancel = CancellationToken::new();
        let today = Local::now().date_naive();
        let handle = {
            let directory = directory.clone();
            let surface = surface.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                run_search(directory, surface, &term, today, cancel).await;
            })
        };
        current = Some((cancel, handle));
    }

    if let Some((cancel, handle)) = current.take() {
        cancel.cancel();
        let _ = handle.await;
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
