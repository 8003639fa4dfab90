use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split PDFs into a fixed number of roughly equal parts")]
#[command(version)]
pub struct Cli {
    /// Defaults to an interactive `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split every PDF in a directory (interactive unless --pieces is given)
    Run(RunArgs),

    /// Split a single PDF
    Split {
        /// PDF file to split
        path: PathBuf,

        /// Number of parts to produce
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        pieces: u32,

        /// Output directory
        #[arg(short, long, default_value = crate::config::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Don't write files for parts without pages
        #[arg(long)]
        skip_empty: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List PDFs in a directory with their page counts
    #[command(alias = "ls")]
    List {
        /// Directory to scan (default: the executable's directory, like `run`)
        dir: Option<PathBuf>,
    },

    /// Show how a page count would be divided, without touching any file
    Partition {
        /// Total number of pages
        total_pages: u32,

        /// Number of parts
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        pieces: u32,
    },

    /// Run as MCP server
    Mcp,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Directory to read PDFs from (default: the executable's directory)
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Directory to write parts to (default: ./split_pdfs)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of parts; prompts when omitted
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub pieces: Option<u32>,

    /// Don't write files for parts without pages
    #[arg(long)]
    pub skip_empty: bool,
}
