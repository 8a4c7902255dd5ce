mod api;
mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let Some(command) = command_line.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };

    let cfg = config::Config::load(command_line.config.as_deref()).wrap_err("Load configuration error")?;

    let cmd: Box<dyn command::Command> = match command {
        cli::Commands::Serve { bind, content_root, eager } => {
            Box::new(command::ServeCommand::new(cfg, bind, content_root, eager))
        }
        cli::Commands::Index { root_path } => {
            Box::new(command::IndexCommand::new(cfg, root_path))
        }
        cli::Commands::Search { query, content_root } => {
            Box::new(command::SearchCommand::new(cfg, query, content_root))
        }
    };
    cmd.execute().await?;

    Ok(())
}
