use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use synergy_core::api;
use synergy_core::commands::CommandHandler;
use synergy_core::providers::traits::GenerationProvider;
use synergy_core::{ChatClient, GeminiProvider, ProviderConfig, SynergyAnalyzer};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Food synergy explorer backed by Gemini", long_about = None)]
struct Args {
    /// Gemini API key; overrides API_KEY from the environment
    #[arg(short, long)]
    api_key: Option<String>,

    /// Serve the HTTP API instead of the interactive prompt
    #[arg(long)]
    api: bool,

    #[arg(long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    colored::control::set_override(true);

    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synergy_core=info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = match ProviderConfig::from_env_with_key(args.api_key.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!(kind = e.kind(), "{}", e);
            return Err(e).context("Gemini provider is not configured");
        }
    };

    let provider: Arc<dyn GenerationProvider> = Arc::new(GeminiProvider::new(config));
    info!(model = %provider.get_model_info(), "provider ready");

    let analyzer = SynergyAnalyzer::new(provider.clone());
    let chat = ChatClient::new(provider);

    if args.api {
        run_api_server(args.port, analyzer, chat).await
    } else {
        run_cli_mode(analyzer, chat).await
    }
}

async fn run_cli_mode(analyzer: SynergyAnalyzer, chat: ChatClient) -> Result<()> {
    let mut command_handler = CommandHandler::new(analyzer, chat);

    if let Err(e) = command_handler.handle_command("help").await {
        println!("{}", e.red());
    }

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    loop {
        match rl.readline("👤 ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                if let Err(e) = command_handler.handle_command(input).await {
                    println!("{}", e.red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

async fn run_api_server(port: u16, analyzer: SynergyAnalyzer, chat: ChatClient) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = api::create_api(analyzer, chat);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, "API server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
