mod commands;
mod format;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{pack::PackArgs, schema::SchemaArgs, unpack::UnpackArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "protostruct",
    about = "Inspect protobuf messages as engine structs and pack them for transport"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the struct type of a message
    Schema(SchemaArgs),
    /// Serialize a struct or field inspector into a transport frame
    Pack(PackArgs),
    /// Rebuild an inspector from a transport frame and print its type
    Unpack(UnpackArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::Pack(args) => args.run(),
        Commands::Unpack(args) => args.run(),
    }
}
