use clap::{Parser, Subcommand};
use monkko::commands::{extract::ExtractArgs, generate::GenerateArgs, init::InitArgs};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate TypeScript types and Zod validators from monkko schemas.
#[derive(Parser, Debug)]
#[command(name = "monkko", version, about)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate types and validators for every schema file
    Generate(GenerateArgs),
    /// Print extracted schemas as JSON
    Extract(ExtractArgs),
    /// Create monkko.config.json and ignore the output directory
    Init(InitArgs),
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    match cli.command {
        Command::Generate(args) => monkko::commands::generate::run(&cwd, args),
        Command::Extract(args) => monkko::commands::extract::run(&cwd, args),
        Command::Init(args) => monkko::commands::init::run(&cwd, args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
