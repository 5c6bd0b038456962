//! SpongeBob CLI binary entry point.

use std::sync::Arc;

use spongebob::cli::{Cli, Repl};
use spongebob::config::ChatConfig;
use spongebob::provider::{ChatCompletionsProvider, ChatProvider};
use spongebob::session::ChatSession;
use tokio::io::BufReader;
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }

    // Stdin is read on a blocking thread that would otherwise keep the runtime alive.
    std::process::exit(0);
}

async fn run(cli: Cli) -> spongebob::error::Result<()> {
    let config = ChatConfig::load(cli.env_file.as_deref())?.with_timeout(cli.timeout());
    tracing::debug!(?config, "loaded config");

    let provider = ChatCompletionsProvider::new(config)?;
    tracing::debug!(model = provider.model_id(), "starting chat");
    let session = ChatSession::new(provider, cli.settings());

    let interrupt = Arc::new(Notify::new());
    let listener = interrupt.clone();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            listener.notify_one();
        }
    });

    let mut repl = Repl::new(session, std::io::stdout(), interrupt);
    repl.run(BufReader::new(tokio::io::stdin())).await
}
