use clap::Parser;
use miette::Result;
use pathmin::cli::{Cli, Commands};
use pathmin::output::Printer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "pathmin=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Optimize(args) => pathmin::cli::optimize::run(args, &printer)?,
        Commands::Parse(args) => pathmin::cli::parse::run(args, &printer)?,
        Commands::Stringify(args) => pathmin::cli::stringify::run(args, &printer)?,
        Commands::Validate(args) => pathmin::cli::validate::run(args, &printer)?,
        Commands::Init(args) => pathmin::cli::init::run(args, &printer)?,
        Commands::Completions(args) => pathmin::cli::completions::run(args)?,
    }

    Ok(())
}
