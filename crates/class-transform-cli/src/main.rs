mod cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use class_transform::TransformError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "class-transform",
    version,
    about = "Flip Vue class bindings between object form and string/template form"
)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform the class binding at a line
    Transform(cmd::transform::TransformArgs),
    /// Show which conversion would run at a line
    Detect {
        /// Template file to inspect
        file: PathBuf,
        /// 1-based cursor line
        #[arg(short, long)]
        line: usize,
    },
    /// Print the effective configuration
    Config {
        /// Config file (defaults to ./.class-transform.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Transform(args) => cmd::transform::run(args),
        Commands::Detect { file, line } => cmd::detect::run(&file, line),
        Commands::Config { config } => cmd::config::run(config.as_deref()),
    };

    if let Err(e) = result {
        match e.downcast_ref::<TransformError>() {
            Some(reason) if reason.is_user_facing() => eprintln!("{reason}"),
            _ => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
