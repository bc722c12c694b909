#![forbid(unsafe_code)]

//! Portfolio CLI
//!
//! Command-line interface for portfolio record administration: record
//! creation and field updates on the store side, plus the read API server.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_api::{ProjectResponse, Server};
use portfolio_core::ProjectId;
use portfolio_store::{RecordStore, WritePath};
use tracing_subscriber::EnvFilter;

mod config;

use config::AppConfig;

/// Portfolio - project record administration
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(version, about = "Project record store and read API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the read API server
    Serve,
    /// Create a new project record, printing its id
    Add {
        /// Project title
        title: String,
    },
    /// Apply field updates to an existing record
    Set {
        /// Record id
        id: ProjectId,
        /// Replacement description (cleared when omitted)
        #[arg(long)]
        description: Option<String>,
        /// Replacement founding year, coerced permissively (zeroed when omitted)
        #[arg(long)]
        founded: Option<String>,
    },
    /// Print one record as the API would serve it
    Get {
        /// Record id
        id: ProjectId,
    },
    /// Print every record as the API would serve them
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load(args.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");
    let store = config.open_store().await?;

    match args.command {
        Command::Serve => {
            Server::new(config.api, store).run().await?;
        }
        Command::Add { title } => {
            let id = store.create(&title).await?;
            println!("{id}");
        }
        Command::Set {
            id,
            description,
            founded,
        } => {
            WritePath::new(store)
                .apply(id, description.as_deref(), founded.as_deref())
                .await?;
        }
        Command::Get { id } => {
            let project = store.get(id).await?;
            let response = ProjectResponse::from(project);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::List => {
            let responses: Vec<ProjectResponse> = store
                .list_all()
                .await?
                .into_iter()
                .map(ProjectResponse::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&responses)?);
        }
    }

    Ok(())
}
