use anyhow::Context;
use callscan_core::config::{CallscanConfig, CliOverrides};
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "callscan=debug" } else { "callscan=info" };
    callscan_core::tracing::init_tracing_with_default(default_filter);

    let overrides = match &cli.command {
        Commands::Scan {
            output,
            format,
            threads,
            sequential,
            extension,
            ..
        } => CliOverrides {
            batch_threads: *threads,
            batch_parallel: sequential.then_some(false),
            batch_extension: extension.clone(),
            output_format: format.map(Into::into),
            output_path: output.clone(),
        },
        _ => CliOverrides::default(),
    };

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = CallscanConfig::load(&cwd, cli.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Scan { dir, stdout, .. } => commands::scan(&config, &dir, stdout, cli.json),
        Commands::Analyze { file } => commands::analyze(&config, &file, cli.json),
        Commands::Detect { text } => commands::detect(&config, &text, cli.json),
        Commands::Config => commands::show_config(&config),
    }
}
