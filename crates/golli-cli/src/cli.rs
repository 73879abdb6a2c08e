use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "golli",
    about = "golli: users, lessons and tolli notes over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the identity hash of a string (e.g. an email, to look up a user)
    Hash(HashArgs),
    /// Print the effective server configuration as TOML
    Config(ConfigArgs),
}

/// Config file plus per-field overrides, shared by `serve` and `config`.
#[derive(Args)]
pub struct ConfigSource {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Largest request body accepted on write routes
    #[arg(long)]
    pub max_body_bytes: Option<usize>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

#[derive(Args)]
pub struct HashArgs {
    /// Input to fingerprint
    pub input: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}
