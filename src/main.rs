mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use cli::Command;
use mail_pagination::PagingConfig;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present
    let config = load_config();

    let result = match cli.command {
        Command::Adjacent(args) => commands::run_adjacent(&args),
        Command::Refresh(args) => commands::run_refresh(&args),
        Command::Query(args) => commands::run_query(&args, &config),
        Command::Walk(args) => {
            info!(
                page_size = args.page_size.unwrap_or(config.default_page_size),
                label = %args.label,
                ascending = args.ascending,
                "walk starting"
            );
            // Shared cancellation token + signal handlers.
            let cancel = setup_signal_handlers();
            commands::run_walk(&args, config, cancel).await
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "mailbox-pager failed");
        std::process::exit(1);
    }
}

/// Paging config from `MAIL_API_URL` and `MAIL_ACCESS_TOKEN`.
fn load_config() -> PagingConfig {
    let mut config = PagingConfig::default();
    if let Ok(url) = std::env::var("MAIL_API_URL") {
        config.base_url = url;
    }
    config.access_token = std::env::var("MAIL_ACCESS_TOKEN")
        .ok()
        .filter(|t| !t.is_empty());
    config
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, shutting down");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                    info!("received SIGTERM, shutting down");
                    cancel_clone.cancel();
                }
                Err(e) => tracing::warn!(error = %e, "failed to register SIGTERM handler"),
            }
        });
    }

    cancel
}
