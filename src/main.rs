use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tree_climber::config::{load_from_path, resolve_path};
use tree_climber::{
    execute_navigation, execute_operation, execute_query, NavigationCommand, OperationCommand,
    Point, ProfileRegistry, QueryCommand,
};

#[derive(Parser)]
#[command(name = "tree-climber")]
#[command(about = "Structural navigation and editing over tree-sitter syntax trees", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Language config file (defaults to $TREE_CLIMBER_CONFIG, then
    /// ~/.config/tree-climber/languages.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move the cursor between scopes
    Navigate {
        #[command(flatten)]
        target: Target,

        command: NavigationCommand,

        /// Source file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Compute a structural edit
    Operate {
        #[command(flatten)]
        target: Target,

        command: OperationCommand,

        /// Show the edit as a unified diff instead of JSON
        #[arg(short, long)]
        diff: bool,

        /// Source file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Describe the node at the cursor
    Query {
        #[command(flatten)]
        target: Target,

        command: QueryCommand,

        /// Source file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// List available languages
    Languages,
}

#[derive(Args)]
struct Target {
    /// Language name
    #[arg(short, long)]
    lang: String,

    /// Zero-based row of the cursor
    #[arg(short, long)]
    row: usize,

    /// Zero-based UTF-16 column of the cursor
    #[arg(short, long)]
    column: usize,
}

impl Target {
    fn point(&self) -> Point {
        Point::new(self.row, self.column)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = load_registry(cli.config)?;

    match cli.command {
        Commands::Navigate {
            target,
            command,
            file,
        } => {
            let content = read_content(file.as_deref())?;
            let profile = registry.get(&target.lang)?;
            let result = execute_navigation(&profile, command, &content, target.point())?;
            print_json(&result)
        }

        Commands::Operate {
            target,
            command,
            diff,
            file,
        } => {
            let content = read_content(file.as_deref())?;
            let profile = registry.get(&target.lang)?;
            let result = execute_operation(&profile, command, &content, target.point())?;
            match result {
                Some(replacement) if diff => {
                    display_diff(file.as_deref(), &content, &replacement.apply(&content));
                    Ok(())
                }
                result => print_json(&result),
            }
        }

        Commands::Query {
            target,
            command,
            file,
        } => {
            let content = read_content(file.as_deref())?;
            let profile = registry.get(&target.lang)?;
            let result = execute_query(&profile, command, &content, target.point())?;
            print_json(&result)
        }

        Commands::Languages => cmd_languages(&registry),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    let mut builder = env_logger::Builder::from_env(env);
    if verbose > 0 {
        builder.parse_filters(level);
    }
    builder.init();
}

/// Builtin languages, extended by the resolved config file if there is one.
fn load_registry(explicit: Option<PathBuf>) -> Result<ProfileRegistry> {
    let Some(path) = resolve_path(explicit) else {
        return Ok(ProfileRegistry::builtin());
    };
    log::info!("loading language config from {}", path.display());
    let config = load_from_path(&path)?;
    Ok(config.registry())
}

fn read_content(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Show unified diff between original and edited content
fn display_diff(file: Option<&Path>, original: &str, modified: &str) {
    let name = file.map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());
    println!("{}", format!("--- {name} (original)").dimmed());
    println!("{}", format!("+++ {name} (edited)").dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}

fn cmd_languages(registry: &ProfileRegistry) -> Result<()> {
    println!("{}", "Available languages:".bold());
    for definition in registry.languages() {
        println!(
            "  {} {} ({:?} grammar)",
            definition.name.cyan(),
            definition.display_name,
            definition.grammar
        );
    }
    Ok(())
}
