use clap::Subcommand;
use hubrelay::config::Config;
use hubrelay::core::path::config_file;
use hubrelay::core::{RelayError, RelayResult};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
    /// Show the effective configuration
    Show,
}

pub fn run(cmd: ConfigCommands, path: Option<&Path>) -> RelayResult<()> {
    match cmd {
        ConfigCommands::Init { force } => init(path, force),
        ConfigCommands::Show => show(path),
    }
}

fn target_path(path: Option<&Path>) -> RelayResult<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => config_file(),
    }
}

fn init(path: Option<&Path>, force: bool) -> RelayResult<()> {
    let path = target_path(path)?;

    if path.exists() && !force {
        return Err(RelayError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(&path)?;
    println!("✓ Wrote default config to {}", path.display());

    Ok(())
}

fn show(path: Option<&Path>) -> RelayResult<()> {
    let config = Config::load(path)?;

    print!("{}", serde_yaml::to_string(&config)?);
    println!(
        "# token: {}",
        if config.has_token() { "set" } else { "not set" }
    );

    Ok(())
}
