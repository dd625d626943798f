use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use garage_console::api::GarageApiClient;
use garage_console::config::{AppConfig, CliConfig, FileConfig, DEFAULT_REQUEST_TIMEOUT_SEC};
use garage_console::guard::{evaluate, Decision};
use garage_console::notifications::NotificationCenter;
use garage_console::routing;
use garage_console::session::{FileSessionStore, MemorySessionStore, SessionVault};
use garage_console::workflow::{snapshot_fields, SubmitOutcome, WorkflowCoordinator};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Base URL of the garage backend API.
    #[clap(long)]
    pub backend_url: Option<String>,

    /// Timeout in seconds for backend requests.
    #[clap(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SEC)]
    pub request_timeout_sec: u64,

    /// Path to the durable session marker file.
    #[clap(long, value_parser = parse_path)]
    pub session_file: Option<PathBuf>,

    /// Path to a TOML config file. Values there override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the access guard for a route path.
    Check { path: String },

    /// Review a job card (workflow step 1).
    View { id: String },

    /// Run the full edit workflow for a job card: review, carry-forward,
    /// merge, submit.
    Edit {
        id: String,

        /// Field overrides applied in the edit step, as field=value.
        #[clap(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },

    /// Clear the local session marker.
    Logout,
}

/// Runs the guard the way the router would before mounting a page. Returns
/// true when the page may render.
fn admitted(vault: &SessionVault, path: &str) -> bool {
    match evaluate(path, vault.is_present()) {
        Decision::Admit => true,
        Decision::RedirectTo(route) => {
            println!("Redirected to {}", route);
            false
        }
    }
}

fn print_card_fields(fields: &std::collections::BTreeMap<String, String>) {
    for (name, value) in fields {
        println!("{:>16}: {}", name, value);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        backend_url: cli_args.backend_url.clone(),
        request_timeout_sec: cli_args.request_timeout_sec,
        session_file: cli_args.session_file.clone(),
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let vault = SessionVault::new(
        Arc::new(FileSessionStore::initialize(config.session_file.clone())),
        Arc::new(MemorySessionStore::new()),
    );

    let api = Arc::new(GarageApiClient::new(
        config.backend_url.clone(),
        config.request_timeout_sec,
    ));
    let notices = Arc::new(NotificationCenter::new());
    let coordinator = WorkflowCoordinator::new(api, notices.clone());

    match cli_args.command {
        Command::Check { path } => {
            match evaluate(&path, vault.is_present()) {
                Decision::Admit => println!("Admit {}", path),
                Decision::RedirectTo(route) => println!("Redirect to {}", route),
            }
        }

        Command::View { id } => {
            if !admitted(&vault, &routing::job_card_detail(&id)) {
                return Ok(());
            }
            let token = coordinator.begin_navigation();
            let card = coordinator
                .load(token, &id)
                .await
                .with_context(|| format!("Failed to load job card {}", id))?;
            println!("Job card {}", card.id);
            print_card_fields(&snapshot_fields(&card));
        }

        Command::Edit { id, set } => {
            if !admitted(&vault, &routing::job_card_edit(&id)) {
                return Ok(());
            }

            // Step 1: review
            let token = coordinator.begin_navigation();
            let card = coordinator
                .load(token, &id)
                .await
                .with_context(|| format!("Failed to load job card {}", id))?;

            // Transition: carry the prefillable subset in the address
            let navigation = coordinator.advance(&card);
            info!("Navigating to {}", navigation.route);
            let carried_query = navigation
                .route
                .split_once('?')
                .map(|(_, query)| query.to_string());

            // Step 2: merge carried state with a fresh fetch, apply edits
            let token = coordinator.begin_navigation();
            let mut form = coordinator
                .resolve(token, &id, carried_query.as_deref())
                .await?;
            for pair in &set {
                let (field, value) = pair
                    .split_once('=')
                    .with_context(|| format!("Invalid --set value (want field=value): {}", pair))?;
                form.set(field, value);
            }

            match coordinator.submit(token, &id, &form).await? {
                SubmitOutcome::Saved { navigation } => {
                    println!("Saved. Returning to {}", navigation.route);
                }
                SubmitOutcome::Rejected { message } => {
                    println!("Not saved: {}", message);
                }
            }
            for notice in notices.drain() {
                println!("[{}] {}", format!("{:?}", notice.level).to_lowercase(), notice.message);
            }
        }

        Command::Logout => {
            vault.clear()?;
            println!("Session cleared");
        }
    }

    Ok(())
}
