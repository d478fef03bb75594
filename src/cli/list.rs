use crate::dataset::Name;
use clap::Parser;

// -----------------------------------------------------------------------------
// Dataset List

/// List datasets.
#[derive(Clone, Debug, Parser)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Dataset name.
    #[clap(short = 'n', long)]
    pub name: Option<Name>,
}
