use crate::cli;
use crate::dataset::month::{MonthRange, TripMonth};
use crate::utils;
use crate::utils::remote_file::RemoteFile;
use chrono::Utc;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use indicatif::{style::ProgressStyle, ProgressBar};
use log::{debug, info, warn};
use std::fs::create_dir_all;

/// Download trip record files for a range of months.
///
/// Returns the files that were downloaded, or in dry run mode, the files
/// that would have been.
pub async fn trip_data(args: &cli::download::Args) -> Result<Vec<RemoteFile>, Report> {
    // Reject malformed input before any enumeration or I/O.
    let start = TripMonth::new(args.start_year, args.start_month)?;
    let end = TripMonth::new(args.end_year, args.end_month)?;
    let range = MonthRange::new(start, end)?;
    let total = range.len();

    info!(
        "Downloading dataset: {} ({start} to {end}, {total} files)",
        args.dataset
    );

    // Months before the dataset's first publication will 404, say so up front.
    let first_month = args.dataset.first_month()?;
    if start < first_month {
        warn!(
            "{} trip records begin {first_month}; earlier months are not published.",
            args.dataset
        );
    }

    // --------------------------------------------------------------------
    // Dry Run

    if args.dryrun {
        let mut files = Vec::new();
        for trip_month in range {
            let url = args.dataset.remote_url(&trip_month)?;
            let local_path = args.dir.join(args.dataset.remote_key(&trip_month));
            info!("Dry run: would download {url} to {local_path:?}");
            files.push(RemoteFile {
                url: url.to_string(),
                local_path,
                ..Default::default()
            });
        }
        return Ok(files);
    }

    // --------------------------------------------------------------------
    // Download

    // Create the output directory if it doesn't exist
    if !args.dir.exists() {
        info!("Creating output directory: {:?}", args.dir);
        create_dir_all(&args.dir)?;
    }

    let progress_bar_style = ProgressStyle::with_template(
        "{bar:40} {pos}/{len} ({percent}%) | Elapsed: {elapsed_precise}",
    )
    .wrap_err("Failed to create progress bar from template.")?;
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(progress_bar_style);

    let mut files = Vec::new();
    let mut num_failed = 0;

    for trip_month in range {
        let url = args.dataset.remote_url(&trip_month)?;
        let local_path = args.dir.join(args.dataset.remote_key(&trip_month));

        if args.skip_existing && local_path.exists() {
            info!("File exists, skipping download: {local_path:?}");
            progress_bar.inc(1);
            continue;
        }

        debug!("Downloading file: {url} to {local_path:?}");
        // One bad month never aborts the rest of the range.
        match utils::download_file(url.as_str(), &local_path).await {
            Ok(()) => files.push(RemoteFile {
                url: url.to_string(),
                local_path,
                date_downloaded: Utc::now(),
            }),
            Err(e) => {
                warn!("Unable to download {trip_month}: {e}");
                num_failed += 1;
            }
        }
        progress_bar.inc(1);
    }

    progress_bar.finish();

    if num_failed > 0 {
        return Err(eyre!("Failed to download {num_failed} of {total} files."));
    }

    info!("Done.");
    Ok(files)
}
