mod classify;
mod level;
mod schema;
mod scopes;
mod view;
mod watch;

pub use level::LevelCommands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use testscope_api::TestVariant;
use testscope_core::ScopeConfig;

#[derive(Parser)]
#[command(
    name = "testscope",
    version,
    about = "Test artifact search scopes for Android Gradle projects",
    long_about = "Testscope reads the build model of a synced Android Gradle project and computes, \
                  for every module, the source scope of its android test and unit test artifacts \
                  and the scope each artifact must not see: the other artifact's sources, classes \
                  and the libraries and modules only the other artifact depends on."
)]
pub struct Cli {
    /// Configuration file (defaults to ~/.testscope/config.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the source and exclude scopes of the test artifacts
    Scopes {
        /// Sync snapshot of the project
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
        /// Only this module
        #[arg(long)]
        module: Option<String>,
        /// Only this test artifact
        #[arg(long, value_parser = parse_variant)]
        variant: Option<TestVariant>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Tell which test scopes a file belongs to or is excluded from
    Classify {
        /// Sync snapshot of the project
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
        /// File or directory to classify (`lib.jar!/entry` for archive entries)
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Resync the scopes every time the snapshot changes
    #[command(
        long_about = "Loads the snapshot, then watches it. Every change counts as a Gradle sync: \
                            the project's cache entries are dropped and rebuilt."
    )]
    Watch {
        /// Sync snapshot of the project
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },
    /// Print the JSON schema of the sync snapshot format
    Schema,
    /// Parse or rewrite Gradle language level strings
    Level {
        #[command(subcommand)]
        command: LevelCommands,
    },
}

fn parse_variant(s: &str) -> Result<TestVariant, String> {
    s.parse().map_err(|e: testscope_api::ApiError| e.to_string())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let to_stderr = matches!(cli.command, Commands::Watch { .. });
    let _guard = testscope_runtime::init_logging("cli", to_stderr);

    let config = || ScopeConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Scopes {
            snapshot,
            module,
            variant,
            json,
        } => scopes::run(&snapshot, config()?, module, variant, json),
        Commands::Classify { snapshot, path } => classify::run(&snapshot, config()?, &path),
        Commands::Watch { snapshot } => watch::run(&snapshot, config()?),
        Commands::Schema => schema::run(),
        Commands::Level { command } => level::run(command),
    }
}
