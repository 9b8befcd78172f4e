use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "letterpress",
    about = "Render a template file with companion data",
    version
)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template to stdout or a file
    Render {
        /// Path to the template
        template: PathBuf,

        /// Inline data as a JSON object, or a path to a data file
        #[arg(short, long, value_name = "JSON|PATH", conflicts_with = "data_file")]
        data: Option<String>,

        /// External data file (JSON or Rhai)
        #[arg(long, value_name = "PATH")]
        data_file: Option<PathBuf>,

        /// Base directory for includes (default: current directory)
        #[arg(long)]
        src: Option<PathBuf>,

        /// Text prepended to the template source
        #[arg(long)]
        prepend: Option<String>,

        /// Text appended to the template source
        #[arg(long)]
        append: Option<String>,

        /// Render for production (`environment` is "prod")
        #[arg(long)]
        optimize: bool,

        /// Disable HTML autoescaping
        #[arg(long)]
        no_autoescape: bool,

        /// TOML file with base options; flags override it
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the extensions and cache patterns used by the renderer
    Info {
        /// TOML file with options
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}
