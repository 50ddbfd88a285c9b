pub mod completions;
pub mod init;
pub mod optimize;
pub mod parse;
pub mod stringify;
pub mod validate;

use clap::{Parser, Subcommand};

/// pathmin - SVG path data parser and minifier
#[derive(Parser, Debug)]
#[command(name = "pathmin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minify path data from path list files or a literal string
    Optimize(optimize::OptimizeArgs),

    /// Print the command records of a path data string as JSON
    Parse(parse::ParseArgs),

    /// Serialize JSON command records to minimal path data
    Stringify(stringify::StringifyArgs),

    /// Report path data that renderers would truncate
    Validate(validate::ValidateArgs),

    /// Initialize a pathmin project (generates pathmin.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
