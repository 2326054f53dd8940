mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, docs::DocsSubcommand, taxonomy::TaxonomySubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "openpack",
    about = "OpenPack dataset metadata: activity taxonomies, label translation and docs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from configs/ or .git/)
    #[arg(long, global = true, env = "OPENPACK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate or check docs/DATA_STREAM.md
    Docs {
        #[command(subcommand)]
        subcommand: DocsSubcommand,
    },

    /// Inspect registered activity taxonomies
    Taxonomy {
        #[command(subcommand)]
        subcommand: TaxonomySubcommand,
    },

    /// Translate class IDs to indices or back
    #[command(disable_version_flag = true)]
    Convert {
        /// Annotation name, e.g. openpack-operations
        taxonomy: String,
        /// Annotation version (default: latest registered)
        #[arg(long)]
        version: Option<String>,
        /// Target space
        #[arg(long, value_enum)]
        to: cmd::convert::Space,
        /// Values to translate
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },

    /// Show or validate the docs configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Docs { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Docs { subcommand } => cmd::docs::run(&root, subcommand, cli.json),
        Commands::Taxonomy { subcommand } => cmd::taxonomy::run(subcommand, cli.json),
        Commands::Convert {
            taxonomy,
            version,
            to,
            values,
        } => cmd::convert::run(&taxonomy, version.as_deref(), to, &values, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
