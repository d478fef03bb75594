use crate::cli;
use crate::dataset::Name;
use crate::utils::table::Table;
use color_eyre::eyre::{Report, Result};
use itertools::Itertools;
use strum::IntoEnumIterator;

/// List datasets, returning the rendered table.
pub fn datasets(args: &cli::list::Args) -> Result<String, Report> {
    // table of name, first published month, example file name
    let mut table = Table::new();
    table.headers = vec!["Name", "First Month", "Example File"]
        .into_iter()
        .map(String::from)
        .collect_vec();

    for name in Name::iter() {
        // Check if this was not the name requested by CLI args
        if let Some(args_name) = &args.name {
            if &name != args_name {
                continue;
            }
        }

        let first_month = name.first_month()?;
        let row = vec![
            name.to_string(),
            first_month.to_string(),
            name.remote_key(&first_month),
        ];
        table.rows.push(row);
    }

    let markdown = table.to_markdown()?;
    println!("\n{markdown}");

    Ok(markdown)
}
