//! aas-semantics: semantic identifier matching for Asset Administration Shells
//!
//! Compares ECLASS, IEC CDD and IRI semantic ids across notations and
//! versions, and searches AAS JSON documents by semantic id.

use aas_semantics::{
    cli,
    config::{
        AppConfig, CliOverrides, OutputFormat, Validatable, generate_example_config,
        generate_json_schema,
    },
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aas-semantics")]
#[command(version)]
#[command(about = "Semantic identifier matching for Asset Administration Shells", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (or no match without --fail-on-no-match)
    1  No match found with --fail-on-no-match
    2  Error occurred

EXAMPLES:
    # Does an ECLASS id in slash notation match a versionless hash id?
    aas-semantics check 0173/1///01#AHF578#001 0173-1#01-AHF578

    # All notations of an ECLASS id
    aas-semantics equivalents 0173-1#02-AAO677#002

    # Find every Marking in a Markings collection
    aas-semantics find markings.json https://admin-shell.io/zvei/nameplate/1/0/Nameplate/Markings/Marking --all")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Exit with code 1 when nothing matches
    #[arg(long, global = true)]
    fail_on_no_match: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a candidate semantic id matches a target
    Check {
        /// Semantic id of the element (candidate)
        candidate: String,
        /// Semantic id searched for (target)
        target: String,
        /// Explain which rule decided the result
        #[arg(long)]
        explain: bool,
    },

    /// List every notation of an ECLASS or IRI semantic id
    Equivalents {
        /// Semantic id to canonicalize
        semantic_id: String,
    },

    /// Extract the version and revision of an IRI semantic id
    Version {
        /// IRI semantic id, e.g. https://admin-shell.io/zvei/nameplate/2/0/Nameplate
        semantic_id: String,
    },

    /// Search the children of a Submodel, collection or list by semantic id
    Find {
        /// AAS JSON file holding the container element
        document: PathBuf,
        /// Semantic id to search for
        target: String,
        /// Report every match instead of the first
        #[arg(short, long)]
        all: bool,
    },

    /// List known submodel templates
    Templates {
        /// Only templates matching this semantic id
        target: Option<String>,
        /// Only templates the submodel in this AAS JSON file conforms to
        #[arg(short, long)]
        document: Option<PathBuf>,
    },

    /// Identifiers under which an element's concept description may be stored
    LookupIds {
        /// AAS JSON file holding the element
        document: PathBuf,
    },

    /// Print an example config file or its JSON Schema
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print a commented example .aas-semantics.yaml
    Example,
    /// Print the JSON Schema of the config file format
    Schema,
    /// Print the effective configuration (defaults + file + CLI)
    Show,
}

impl Cli {
    /// Settings given on the command line, layered over the config file.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format,
            pretty: self.pretty,
            fail_on_no_match: self.fail_on_no_match,
            quiet: self.quiet,
        }
    }
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli.overrides());
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    for error in config.validate() {
        tracing::warn!("Config: {error}");
    }

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Check {
            candidate,
            target,
            explain,
        } => cli::run_check(&candidate, &target, explain, &config, &mut stdout),

        Commands::Equivalents { semantic_id } => {
            cli::run_equivalents(&semantic_id, &config, &mut stdout)?;
            Ok(0)
        }

        Commands::Version { semantic_id } => {
            cli::run_version(&semantic_id, &config, &mut stdout)?;
            Ok(0)
        }

        Commands::Find {
            document,
            target,
            all,
        } => cli::run_find(&document, &target, all, &config, &mut stdout)
            .with_context(|| format!("searching {}", document.display())),

        Commands::Templates { target, document } => {
            cli::run_templates(target.as_deref(), document.as_deref(), &config, &mut stdout)?;
            Ok(0)
        }

        Commands::LookupIds { document } => {
            cli::run_lookup_ids(&document, &config, &mut stdout)
                .with_context(|| format!("reading {}", document.display()))?;
            Ok(0)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Example => write!(stdout, "{}", generate_example_config())?,
                ConfigAction::Schema => writeln!(stdout, "{}", generate_json_schema())?,
                ConfigAction::Show => {
                    let yaml = serde_yaml_ng::to_string(&config)
                        .context("failed to serialize config")?;
                    write!(stdout, "{yaml}")?;
                }
            }
            Ok(0)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "aas-semantics", &mut stdout);
            Ok(0)
        }
    }
}
