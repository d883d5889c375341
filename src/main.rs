//! json-merge CLI
//!
//! Entry point for the `json-merge` command-line tool.

use clap::Parser;
use json_merge::runner::{EXIT_FAILURE, EXIT_SUCCESS};
use json_merge::{ConfigError, MergeFiles, MergeSettings, Output, RunError, SettingsLayer};
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "json-merge")]
#[command(about = "Merge a source JSON template into a target JSON document", version)]
struct Cli {
    /// Source (template) JSON file
    source: Option<PathBuf>,

    /// Target JSON file, overwritten with the merged document
    target: Option<PathBuf>,

    /// Path to a settings file (TOML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Policy for string values: merge or clobber
    #[arg(long, env = "JSON_MERGE_STRING_MERGE_TYPE")]
    string_merge: Option<String>,

    /// Policy for array values: merge or clobber
    #[arg(long, env = "JSON_MERGE_ARRAY_MERGE_TYPE")]
    array_merge: Option<String>,

    /// Token delimiter for string merges
    #[arg(long)]
    delimiter: Option<String>,

    /// Print the merged document instead of writing the target file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            if e.exit_code() == EXIT_FAILURE {
                eprintln!("Failed to merge json files.");
            }
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let merge = MergeFiles::from_paths(cli.source.clone(), cli.target.clone())?;
    let settings = resolve_settings(&cli)?;

    let output = if cli.stdout { Output::Stdout } else { Output::Target };
    let merged = merge
        .with_options(settings.options())
        .with_output(output)
        .execute()?;

    if output == Output::Stdout {
        println!("{}", merged);
    } else {
        println!("Successfully merged json files.");
    }
    Ok(())
}

/// Settings file first, then env vars and flags (clap prefers the flag)
fn resolve_settings(cli: &Cli) -> Result<MergeSettings, ConfigError> {
    let mut layers = Vec::new();
    if let Some(ref path) = cli.config {
        layers.push(SettingsLayer::from_file(path)?);
    }
    layers.push(SettingsLayer {
        string_merge: cli.string_merge.clone(),
        array_merge: cli.array_merge.clone(),
        delimiter: cli.delimiter.clone(),
    });
    MergeSettings::resolve(&layers)
}
