mod demos;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use generics_core::config::{Config, ConfigError};
use generics_core::logger;
use thiserror::Error;

#[derive(Clone, Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file. Defaults to `config.toml` in the current
    /// directory.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Only run the demo with this name.
    #[arg(short, long)]
    demo: Option<String>,
    /// Print the names of all demos and exit.
    #[arg(short, long)]
    list: bool,
}

fn main() -> ExitCode {
    let level = logger::init();

    let args = Args::parse();

    if args.list {
        for demo in demos::DEMOS {
            println!("{}", demo.name);
        }
        return ExitCode::SUCCESS;
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if logger::level_from_env().is_none() {
        if let Ok(Some(filter)) = config.logging.level() {
            level.set(filter);
        }
    }

    let selected = match demos::select(args.demo.as_deref()) {
        Ok(selected) => selected,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    for demo in selected {
        tracing::info!("running demo {}", demo.name);

        if let Err(err) = (demo.run)(&config.demos) {
            tracing::error!("demo {} failed: {}", demo.name, err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

#[derive(Debug, Error)]
#[error("failed to load config file from {path:?}: {source}")]
struct LoadConfigError {
    path: PathBuf,
    source: ConfigError,
}

/// Loads the config file at `path`.
///
/// Without an explicit `path`, `config.toml` in the current directory is used
/// and a missing file falls back to the default config. An explicit `path`
/// must exist.
fn load_config(path: Option<&Path>) -> Result<Config, LoadConfigError> {
    match path {
        Some(path) => Config::from_file(path).map_err(|source| LoadConfigError {
            path: path.to_owned(),
            source,
        }),
        None => {
            let mut path = std::env::current_dir().map_err(|err| LoadConfigError {
                path: PathBuf::from("config.toml"),
                source: ConfigError::Io(err),
            })?;
            path.push("config.toml");

            Config::from_file_or_default(&path).map_err(|source| LoadConfigError { path, source })
        }
    }
}
