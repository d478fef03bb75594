use crate::dataset::Name;
use clap::Parser;
use std::path::PathBuf;

/// Download trip record files for a range of months.
#[derive(Clone, Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Output directory for downloaded files.
    ///
    /// If the directory does not exist, it will be created.
    #[clap(short = 'd', long, default_value_os_t = Args::default().dir)]
    pub dir: PathBuf,

    /// Dataset to download.
    #[clap(long, default_value_t = Args::default().dataset)]
    pub dataset: Name,

    /// First year of the range.
    #[clap(long = "start_year", default_value_t = Args::default().start_year)]
    pub start_year: i32,

    /// First month of the range (1-12).
    #[clap(long = "start_month", default_value_t = Args::default().start_month)]
    pub start_month: u32,

    /// Last year of the range, inclusive.
    #[clap(long = "end_year", default_value_t = Args::default().end_year)]
    pub end_year: i32,

    /// Last month of the range (1-12), inclusive.
    #[clap(long = "end_month", default_value_t = Args::default().end_month)]
    pub end_month: u32,

    /// Report what would be downloaded, without network or filesystem writes.
    #[clap(long)]
    pub dryrun: bool,

    /// Skip months whose file already exists in the output directory.
    #[clap(long = "skip_existing")]
    pub skip_existing: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            dir: PathBuf::from("data"),
            dataset: Name::Yellow,
            start_year: 2009,
            start_month: 1,
            end_year: 2024,
            end_month: 12,
            dryrun: false,
            skip_existing: false,
        }
    }
}
