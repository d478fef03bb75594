pub mod download;
pub mod list;
pub mod verbosity;

use crate::cli::verbosity::Verbosity;
use clap::{Parser, Subcommand};

/// Download NYC trip record data.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Logging verbosity level.
    #[clap(short = 'v', long, global = true, default_value = "info")]
    pub verbosity: Verbosity,
}

/// Download or list trip record datasets.
#[derive(Debug, Subcommand)]
#[clap(verbatim_doc_comment)]
pub enum Command {
    /// Download trip record files for a range of months.
    Download(download::Args),

    /// List datasets.
    List(list::Args),
}
