use colored::Colorize;
use golli_crypto::IdentityHasher;
use golli_server::{GolliServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Hash(args) => cmd_hash(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    tracing::info!(bind = %config.bind_addr, max_body_bytes = config.max_body_bytes, "starting golli");
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(GolliServer::new(config).serve())?;
    Ok(())
}

fn cmd_hash(args: HashArgs) -> anyhow::Result<()> {
    let id = IdentityHasher::hash_str(&args.input);
    println!("{} {}", args.input.bold(), id.to_string().cyan());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// File (or defaults), then command-line overrides.
pub fn resolve_config(source: &ConfigSource) -> anyhow::Result<ServerConfig> {
    let mut config = match &source.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = source.bind {
        config.bind_addr = bind;
    }
    if let Some(max) = source.max_body_bytes {
        config.max_body_bytes = max;
    }
    Ok(config)
}
