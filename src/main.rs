use clap::{Parser, Subcommand};
use hubrelay::config::Config;
use hubrelay::core::{format_error_with_help, RelayResult};
use hubrelay::di::ServiceContainer;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "hubrelay")]
#[command(about = "Read-only relay and terminal browser for the GitHub REST API")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay HTTP service
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind to
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Search GitHub users
    Search {
        /// Search terms
        query: String,
    },
    /// Show a user's profile and repositories
    User {
        /// GitHub login
        username: String,
    },
    /// Show a repository and its latest commits
    Repo {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// Manage the config file
    #[command(subcommand)]
    Config(cli::config::ConfigCommands),
}

fn load_container(config_path: Option<&Path>) -> RelayResult<ServiceContainer> {
    ServiceContainer::new(Config::load(config_path)?)
}

async fn run(cli: Cli) -> RelayResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { port, bind } => {
            cli::serve::run(Config::load(config_path)?, port, bind).await
        }
        Commands::Search { query } => {
            let container = load_container(config_path)?;
            cli::search::run(container.github(), &query).await
        }
        Commands::User { username } => {
            let container = load_container(config_path)?;
            cli::user::run(container.github(), &username).await
        }
        Commands::Repo { owner, repo } => {
            let container = load_container(config_path)?;
            cli::repo::run(container.github(), &owner, &repo).await
        }
        Commands::Config(cmd) => cli::config::run(cmd, config_path),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing; logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
