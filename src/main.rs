//! route-fuzz command-line tool.
//!
//! # Architecture Overview
//!
//! ```text
//!   location ──▶ redirect::planner ──▶ routing::resolver ──▶ distance
//!                       │                    │
//!                       │                    ├── normalize / safety
//!                       │                    └── LRU cache
//!                       ▼
//!              JSON redirect plan on stdout
//!
//!   config (TOML) ──▶ routes + route_tree ──▶ candidate list
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use route_fuzz::config::{load_config, FuzzConfig, LogFormat};
use route_fuzz::observability::logging;
use route_fuzz::routing::LoggingObserver;
use route_fuzz::{levenshtein, plan_redirect, MatchOptions, Resolver};

#[derive(Parser)]
#[command(name = "route-fuzz")]
#[command(about = "Resolve mistyped URL paths to the closest known route", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is unset (overrides the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the route a location should redirect to
    Resolve {
        /// Location to resolve, optionally with query string and fragment
        location: String,

        /// TOML configuration file with routes and matching settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Additional candidate route (repeatable)
        #[arg(short, long = "route")]
        routes: Vec<String>,

        /// Maximum accepted edit distance
        #[arg(long)]
        threshold: Option<usize>,

        /// Maximum accepted distance relative to route length (0.0-1.0)
        #[arg(long)]
        relative_threshold: Option<f64>,

        /// Never match routes containing this substring (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },
    /// Print the edit distance between two strings
    Distance { a: String, b: String },
    /// Print the candidate routes a configuration file yields
    Routes {
        #[arg(short, long)]
        config: PathBuf,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Resolve { config, .. } => config.as_ref(),
            Commands::Routes { config } => Some(config),
            Commands::Distance { .. } => None,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.command.config_path() {
        Some(path) => load_config(path)?,
        None => FuzzConfig::default(),
    };

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    let format = cli.log_format.unwrap_or(config.observability.log_format);
    let level = logging::parse_level(level)
        .ok_or_else(|| format!("invalid log level {level:?}"))?;
    logging::init(level, format)?;

    match cli.command {
        Commands::Resolve {
            location,
            routes,
            threshold,
            relative_threshold,
            exclude,
            ..
        } => {
            let mut options = MatchOptions::from(&config.matching).with_observer(LoggingObserver);
            if let Some(threshold) = threshold {
                options.threshold = threshold;
            }
            if let Some(relative_threshold) = relative_threshold {
                options.relative_threshold = relative_threshold;
            }
            options.exclude.extend(exclude);

            let mut candidates = config.candidates();
            candidates.extend(routes);

            let capacity = NonZeroUsize::new(config.cache.capacity)
                .ok_or("cache.capacity must be greater than zero")?;
            let resolver = Resolver::with_capacity(capacity);

            tracing::debug!(
                location = %location,
                candidates = candidates.len(),
                threshold = options.threshold,
                relative_threshold = options.relative_threshold,
                "Resolving location"
            );

            match plan_redirect(&resolver, &location, &candidates, &options)? {
                Some(redirect) => {
                    println!("{}", serde_json::to_string_pretty(&redirect)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    // Served from the resolver cache when the planner already looked it up
                    let (pathname, _) = route_fuzz::redirect::split_location(&location);
                    let exact = resolver.resolve(pathname, &candidates, &options)?;
                    let report = json!({ "from": pathname, "to": exact, "redirect": false });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    Ok(if exact.is_some() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::FAILURE
                    })
                }
            }
        }
        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&a, &b));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Routes { .. } => {
            for route in config.candidates() {
                println!("{route}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
