//! Flatkit CLI
//!
//! Resolves an options file into the ordered flat-config fragment list

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use flatkit_core::init_tracing;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "flatkit")]
#[command(about = "Flatkit: compose lint flat-config fragments from declarative options")]
#[command(version = flatkit_core::VERSION)]
#[command(
    long_about = "Flatkit turns a small options file into the full, ordered list of\n\
lint flat-config fragments, with built-in rule sets for each integration.\n\
\n\
Examples:\n  \
flatkit print                    # Resolve options found from the current directory\n  \
flatkit print --format yaml      # Same, as YAML\n  \
flatkit names --cwd packages/app # List fragment names for another directory\n  \
flatkit schema -o schema.json    # Write the options JSON Schema"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Options file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to options file (.flatkitrc.json/.flatkitrc.toml/flatkit.yaml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and print the fragment list
    Print {
        /// Directory to resolve from
        #[arg(long, help = "Working directory (default: current directory)")]
        cwd: Option<PathBuf>,

        /// Keep upstream plugin namespaces
        #[arg(long, help = "Skip the plugin rename pass")]
        no_rename: bool,

        /// Output format
        #[arg(short, long, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },

    /// Print the name of every resolved fragment
    Names {
        /// Directory to resolve from
        #[arg(long, help = "Working directory (default: current directory)")]
        cwd: Option<PathBuf>,
    },

    /// Print or write the options JSON Schema
    Schema {
        /// Output file
        #[arg(short, long, help = "Write the schema to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "flatkit=error",
        1 => "flatkit=warn",
        2 => "flatkit=info",
        3 => "flatkit=debug",
        _ => "flatkit=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    match run_command(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("flatkit failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Print {
            cwd,
            no_rename,
            format,
        }) => commands::print_command(cli.config, cwd, no_rename, format).await,

        Some(Commands::Names { cwd }) => commands::names_command(cli.config, cwd).await,

        Some(Commands::Schema { output }) => commands::schema_command(output),

        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
