//! Firmdesk — conversational front-end for the Stolmeier Law website.

use std::path::PathBuf;
use std::sync::Arc;

use firmdesk_fetch::PageSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("FIRMDESK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "fetch" => {
                let Some(url) = args.get(2) else {
                    eprintln!("Usage: firmdesk fetch <url>");
                    std::process::exit(1);
                };
                let fetcher =
                    firmdesk_fetch::Fetcher::new(&firmdesk_core::FetchConfig::from_env());
                match fetcher.fetch(url).await {
                    Some(html) => {
                        for block in firmdesk_extract::linearize(&html) {
                            println!("[{:?}] {}", block.kind, block.text);
                        }
                        return Ok(());
                    }
                    None => {
                        eprintln!("Failed to fetch {}", url);
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                println!("Firmdesk — conversational front-end for the firm website");
                println!();
                println!("Usage: firmdesk [command]");
                println!();
                println!("Commands:");
                println!("  (none)         Start the server");
                println!("  fetch <url>    Fetch a page and print its text blocks");
                println!("  help           Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'firmdesk help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();

    info!("Data directory: {}", data_dir.display());

    let config = firmdesk_core::FirmdeskConfig::from_env(&data_dir)?;
    let port = config.port;

    let engine = firmdesk_chat::ChatEngine::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize chat engine: {}", e))?;

    let state = Arc::new(AppState::new(engine));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Firmdesk server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
