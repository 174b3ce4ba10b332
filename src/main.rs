//! metrics-diff: compare two numeric metrics snapshots
//!
//! Classifies every metric field as increased, decreased, unchanged, new or
//! removed and renders the result as a table, tree, summary, JSON or HTML.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use metrics_diff::{
    cli::{self, DiffOverrides},
    config::{
        discover_config_file, generate_full_example_config, generate_json_schema,
        load_config_file, load_or_default, BehaviorConfig, DiffConfig, DiffPaths, ExportConfig,
        SortKey, CONFIG_FILE_NAMES,
    },
    pipeline::exit_codes,
    reports::{ExportFormat, ReportFormat},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "metrics-diff")]
#[command(version)]
#[command(about = "Compare two numeric metrics snapshots", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
#[command(after_help = "EXIT CODES:
    0  Comparison completed
    1  Error occurred (missing file, invalid document or configuration)
    2  Changes detected with --fail-on-change

EXAMPLES:
    # Compare two runs
    metrics-diff baseline.json candidate.json

    # CI gate: fail when anything moved, ignoring timestamps
    metrics-diff old.json new.json --ignore-field timestamp --fail-on-change

    # Largest relative changes first, top 20, plus an HTML export
    metrics-diff old.json new.json --sort-by percentage --max-changes 20 --export report.html")]
struct Cli {
    /// Path to the old/baseline snapshot
    #[arg(required = true)]
    old: Option<PathBuf>,

    /// Path to the new snapshot
    #[arg(required = true)]
    new: Option<PathBuf>,

    #[command(flatten)]
    diff: DiffArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "METRICS_DIFF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options for the comparison itself
#[derive(clap::Args)]
struct DiffArgs {
    /// Keep unchanged fields in the output
    #[arg(short = 'u', long)]
    show_unchanged: bool,

    /// Output format
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Format of the --export document
    #[arg(long, default_value = "html", requires = "export")]
    export_format: ExportFormat,

    /// Ordering of the change list
    #[arg(long)]
    sort_by: Option<SortKey>,

    /// Show at most this many changes (0 = unlimited)
    #[arg(long)]
    max_changes: Option<usize>,

    /// Field name to skip in every metric (repeatable)
    #[arg(long = "ignore-field", value_name = "FIELD")]
    ignore_fields: Vec<String>,

    /// Metric name to skip entirely (repeatable)
    #[arg(long = "exclude-metric", value_name = "METRIC")]
    exclude_metrics: Vec<String>,

    /// Absolute difference below which values are considered equal
    #[arg(long)]
    float_precision: Option<f64>,

    /// Hide percentages smaller than this magnitude
    #[arg(long)]
    min_percentage_change: Option<f64>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Exit with code 2 if any change is detected
    #[arg(long)]
    fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .metrics-diff.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
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

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run(mut cli: Cli) -> Result<i32> {
    match cli.command.take() {
        None => run_compare(cli),

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "metrics-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Some(Commands::ConfigSchema { output }) => {
            let schema = generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("metrics-diff").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".metrics-diff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_full_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Compare the two positional snapshots.
fn run_compare(cli: Cli) -> Result<i32> {
    let (Some(old), Some(new)) = (cli.old, cli.new) else {
        anyhow::bail!("two snapshot paths are required: metrics-diff <OLD> <NEW>");
    };

    // An explicit config file must load; a discovered one only warns on failure
    let mut app = match &cli.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let (config, loaded_from) = load_or_default(None);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            config
        }
    };

    let args = cli.diff;
    DiffOverrides {
        show_unchanged: args.show_unchanged,
        format: args.format,
        output_file: args.output_file,
        sort_by: args.sort_by,
        max_changes: args.max_changes,
        ignore_fields: args.ignore_fields,
        exclude_metrics: args.exclude_metrics,
        float_precision: args.float_precision,
        min_percentage_change: args.min_percentage_change,
        no_color: cli.no_color,
        title: args.title,
    }
    .apply(&mut app);

    let mut config = DiffConfig::new(DiffPaths { old, new }, app);
    config.export = args.export.map(|path| ExportConfig {
        path,
        format: args.export_format,
    });
    config.behavior = BehaviorConfig {
        fail_on_change: args.fail_on_change,
        quiet: cli.quiet,
    };

    cli::run_diff(config)
}
