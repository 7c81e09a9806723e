#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod api;
mod config;
mod error;
mod fetch;
mod parse;
mod pipeline;
mod reference_date;
mod select;
mod summary;

use std::{process::ExitCode, sync::Arc};

use axum::http::{header::CONTENT_TYPE, Method};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::{ServerArgs, SourceArgs},
    fetch::make_client,
    pipeline::{Outcome, Pipeline},
    reference_date::ReferenceDate,
};

pub use error::Result;

/// Today's school lunch at OŠ Trbovlje.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    server: ServerArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve `GET /api/menu` (default)
    Serve,
    /// Look up one day's menu and print it
    Show {
        /// Day to look up as YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<ReferenceDate>,
        /// Print the JSON body instead of the text summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<ExitCode, Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let client = make_client(&cli.source.user_agent)?;
    let pipeline = Arc::new(Pipeline::new(client, cli.source.source()));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            serve(pipeline, &cli.server).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { date, json } => show(&pipeline, date, json).await,
    }
}

async fn serve(
    pipeline: Arc<Pipeline>,
    server: &ServerArgs,
) -> core::result::Result<(), Box<dyn std::error::Error>> {
    let addr = server.addr()?;
    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    let app = api::router(pipeline)
        .layer(cors_layer)
        .layer(compression_layer);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to listen on {addr}: {e}"))?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

async fn show(
    pipeline: &Pipeline,
    date: Option<ReferenceDate>,
    json: bool,
) -> core::result::Result<ExitCode, Box<dyn std::error::Error>> {
    let response = match date {
        Some(today) => pipeline.menu_for(today).await,
        None => pipeline.todays_menu().await,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match response.outcome() {
            Outcome::Found(found) => println!("{}", found.menu),
            Outcome::Failed { error } => eprintln!("❌ {error}"),
        }
    }
    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
