mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            template,
            data,
            data_file,
            src,
            prepend,
            append,
            optimize,
            no_autoescape,
            config,
            output,
        } => commands::render::run(commands::render::RenderArgs {
            template,
            data,
            data_file,
            src,
            prepend,
            append,
            optimize,
            no_autoescape,
            config,
            output,
        }),
        Commands::Info { config } => commands::info::run(config),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "letterpress=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
