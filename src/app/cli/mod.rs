//! CLI Adapter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, DEFAULT_TASK, RunOptions};

/// Subcommand inserted when the user does not name one.
const IMPLICIT_SUBCOMMAND: &str = "run";

#[derive(Parser)]
#[command(name = "migrun")]
#[command(
    about = "Resolve a migrations assembly and drive an external migration runner",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build or locate the migrations assembly and execute a runner task
    #[command(version, disable_version_flag = true)]
    Run(RunArgs),
}

/// Options accepted by `migrun run`.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Database provider (e.g. sqlserver2012, postgres, sqlite)
    #[arg(short = 'p', long)]
    pub provider: String,
    /// Connection string of the target database
    #[arg(
        short = 'c',
        long = "connectionString",
        conflicts_with = "no_connection",
        required_unless_present = "no_connection"
    )]
    pub connection_string: Option<String>,
    /// Generate a script without connecting to a database
    #[arg(long = "noConnection", requires = "output")]
    pub no_connection: bool,
    /// Version the script starts from (no-connection mode only)
    #[arg(long = "startVersion", requires = "no_connection")]
    pub start_version: Option<i64>,
    /// Version to migrate to; 0 applies all pending migrations
    #[arg(long = "migrateToVersion", default_value_t = 0)]
    pub migrate_to_version: i64,
    /// Migrations assembly or project directory (defaults to the working directory)
    #[arg(short = 'a', long)]
    pub assembly: Option<PathBuf>,
    /// Runner task to execute
    #[arg(short = 't', long, default_value = DEFAULT_TASK)]
    pub task: String,
    /// SQL script file; migration.sql keeps output on the console
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Profile to apply
    #[arg(long)]
    pub profile: Option<String>,
    /// Only run migrations with this tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Opaque value passed through to migrations
    #[arg(long = "context")]
    pub application_context: Option<String>,
    /// Show SQL, timings, and build output
    #[arg(long)]
    pub verbose: bool,
    /// Configuration file (defaults to ./migrun.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl TryFrom<RunArgs> for RunOptions {
    type Error = AppError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        let mut builder = RunOptions::builder(args.provider)
            .no_connection(args.no_connection)
            .migrate_to_version(args.migrate_to_version)
            .task(args.task)
            .tags(args.tags)
            .verbose(args.verbose);

        if let Some(connection_string) = args.connection_string {
            builder = builder.connection_string(connection_string);
        }
        if let Some(start_version) = args.start_version {
            builder = builder.start_version(start_version);
        }
        if let Some(assembly) = args.assembly {
            builder = builder.assembly(assembly);
        }
        if let Some(output) = args.output {
            builder = builder.output(output);
        }
        if let Some(profile) = args.profile {
            builder = builder.profile(profile);
        }
        if let Some(context) = args.application_context {
            builder = builder.application_context(context);
        }
        builder.build()
    }
}

/// Insert the `run` subcommand after the program name unless it is already there.
fn with_implicit_subcommand<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    if args.is_empty() {
        args.push(OsString::from("migrun"));
    }
    if args.get(1).is_none_or(|first| first != IMPLICIT_SUBCOMMAND) {
        args.insert(1, OsString::from(IMPLICIT_SUBCOMMAND));
    }
    args
}

/// Parse command-line tokens into run arguments. Help and version requests come
/// back as clap errors of the matching kind.
pub fn parse_args<I, T>(args: I) -> Result<RunArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = Cli::try_parse_from(with_implicit_subcommand(args.into_iter().map(Into::into)))?;
    let Commands::Run(run) = cli.command;
    Ok(run)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let args = parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());
    init_tracing(args.verbose);

    let config = args.config.clone();
    let result = RunOptions::try_from(args)
        .and_then(|options| crate::app::api::run(&options, config.as_deref()));

    match result {
        Ok(result) => {
            if let Some(path) = result.reporting.output_file() {
                println!("✅ Wrote SQL script to {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
