use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use disco_cli::config::Args;

fn main() -> Result<()> {
  let args = Args::parse();

  // `--log` gana sobre `RUST_LOG`; sin ninguno, solo advertencias.
  let filter = match &args.log {
    Some(directives) => EnvFilter::new(directives),
    None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
  };

  tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(std::io::stderr)).init();

  disco_cli::run(args)
}
