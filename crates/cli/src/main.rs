mod cli;
mod commands;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Command};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_tracing(if cli.verbose { "debug" } else { "info" });

    match &cli.command {
        Command::List(args) => commands::list(&cli.root, args),
        Command::Describe(args) => commands::describe(&cli.root, args),
        Command::Build(args) => commands::build(&cli.root, args),
        Command::Init(args) => commands::init(&cli.root, args).await,
        Command::Serve(args) => server::serve(&cli.root, args).await,
    }
}
