use color_eyre::eyre::{Report, Result};
use std::fs::{create_dir_all, read, read_dir, write};
use std::str::FromStr;
use tempfile::TempDir;
use tripfetch::cli;
use tripfetch::dataset::month::{MonthRange, TripMonth};
use tripfetch::dataset::{download, list, Name, TRIP_DATA_URL};

// ----------------------------------------------------------------------------
// Month Enumeration

#[test]
fn month_range_is_inclusive_and_chronological() -> Result<(), Report> {
    let start = TripMonth::new(2019, 11)?;
    let end = TripMonth::new(2020, 2)?;

    let range = MonthRange::new(start, end)?;
    assert_eq!(range.len(), 4);

    let months = range.map(|m| m.to_string()).collect::<Vec<_>>();
    assert_eq!(months, vec!["2019-11", "2019-12", "2020-01", "2020-02"]);

    Ok(())
}

#[test]
fn month_range_covers_a_single_month() -> Result<(), Report> {
    let month = TripMonth::new(2024, 12)?;
    let range = MonthRange::new(month, month)?;
    assert_eq!(range.collect::<Vec<_>>(), vec![month]);
    Ok(())
}

#[test]
fn month_range_counts_whole_years() -> Result<(), Report> {
    let start = TripMonth::new(2009, 1)?;
    let end = TripMonth::new(2024, 12)?;
    let range = MonthRange::new(start, end)?;
    assert_eq!(range.len(), 16 * 12);
    assert_eq!(range.count(), 16 * 12);
    Ok(())
}

#[test]
fn month_range_rejects_inverted_endpoints() -> Result<(), Report> {
    let start = TripMonth::new(2020, 5)?;
    let end = TripMonth::new(2020, 1)?;
    assert!(MonthRange::new(start, end).is_err());
    Ok(())
}

#[test]
fn trip_month_rejects_out_of_range_months() {
    assert!(TripMonth::new(2020, 0).is_err());
    assert!(TripMonth::new(2020, 13).is_err());
    assert!(TripMonth::from_str("2020-13").is_err());
    assert!(TripMonth::from_str("not-a-month").is_err());
}

#[test]
fn trip_month_displays_zero_padded() -> Result<(), Report> {
    assert_eq!(TripMonth::new(2009, 1)?.to_string(), "2009-01");
    assert_eq!(TripMonth::from_str("2023-09")?.to_string(), "2023-09");
    Ok(())
}

// ----------------------------------------------------------------------------
// Remote Identifiers

#[test]
fn remote_identifiers_are_deterministic() -> Result<(), Report> {
    let month = TripMonth::new(2009, 1)?;
    assert_eq!(
        Name::Yellow.remote_key(&month),
        "yellow_tripdata_2009-01.parquet"
    );
    assert_eq!(
        Name::Yellow.remote_url(&month)?.as_str(),
        format!("{TRIP_DATA_URL}/yellow_tripdata_2009-01.parquet")
    );

    let month = TripMonth::new(2019, 2)?;
    assert_eq!(
        Name::Fhvhv.remote_key(&month),
        "fhvhv_tripdata_2019-02.parquet"
    );
    assert_eq!(Name::Fhvhv.remote_key(&month), Name::Fhvhv.remote_key(&month));

    Ok(())
}

#[test]
fn dataset_names_parse_and_display() -> Result<(), Report> {
    for (name, expected) in [
        (Name::Yellow, "yellow"),
        (Name::Green, "green"),
        (Name::Fhvhv, "fhvhv"),
        (Name::Fhv, "fhv"),
    ] {
        assert_eq!(name.to_string(), expected);
        assert_eq!(Name::from_str(expected)?, name);
    }

    // Names are matched case insensitively.
    assert_eq!(Name::from_str("YELLOW")?, Name::Yellow);

    Ok(())
}

#[test]
fn unknown_dataset_is_rejected() {
    assert!(Name::from_str("purple").is_err());
}

#[test]
fn first_published_months() -> Result<(), Report> {
    for (name, expected) in [
        (Name::Yellow, "2009-01"),
        (Name::Green, "2013-08"),
        (Name::Fhvhv, "2019-02"),
        (Name::Fhv, "2015-01"),
    ] {
        assert_eq!(name.first_month()?.to_string(), expected);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Fetch Driver

#[tokio::test]
async fn dry_run_reports_without_downloading() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let dir = tmp_dir.path().join("data");

    let args = cli::download::Args {
        dir: dir.clone(),
        dataset: Name::Yellow,
        start_year: 2009,
        start_month: 1,
        end_year: 2009,
        end_month: 3,
        dryrun: true,
        ..Default::default()
    };

    let files = download::trip_data(&args).await?;

    let urls = files.iter().map(|f| f.url.as_str()).collect::<Vec<_>>();
    assert_eq!(
        urls,
        vec![
            "https://d37ci6vzurychx.cloudfront.net/trip-data/yellow_tripdata_2009-01.parquet",
            "https://d37ci6vzurychx.cloudfront.net/trip-data/yellow_tripdata_2009-02.parquet",
            "https://d37ci6vzurychx.cloudfront.net/trip-data/yellow_tripdata_2009-03.parquet",
        ]
    );
    assert_eq!(
        files[0].local_path,
        dir.join("yellow_tripdata_2009-01.parquet")
    );

    // Dry run must not touch the filesystem.
    assert!(!dir.exists());

    Ok(())
}

#[tokio::test]
async fn inverted_range_fails_before_any_download() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let dir = tmp_dir.path().join("data");

    let args = cli::download::Args {
        dir: dir.clone(),
        start_year: 2020,
        start_month: 5,
        end_year: 2020,
        end_month: 1,
        ..Default::default()
    };

    assert!(download::trip_data(&args).await.is_err());
    assert!(!dir.exists());

    Ok(())
}

#[tokio::test]
async fn skip_existing_avoids_refetching() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let dir = tmp_dir.path().join("data");
    create_dir_all(&dir)?;
    write(dir.join("yellow_tripdata_2009-01.parquet"), b"already here")?;

    let args = cli::download::Args {
        dir: dir.clone(),
        start_year: 2009,
        start_month: 1,
        end_year: 2009,
        end_month: 1,
        skip_existing: true,
        ..Default::default()
    };

    // The only month in the range is already on disk, so nothing is fetched.
    let files = download::trip_data(&args).await?;
    assert!(files.is_empty());
    assert_eq!(
        read(dir.join("yellow_tripdata_2009-01.parquet"))?,
        b"already here"
    );

    Ok(())
}

#[tokio::test]
async fn failed_fetches_are_counted_across_the_whole_range() -> Result<(), Report> {
    let tmp_dir = TempDir::new()?;
    let dir = tmp_dir.path().join("data");

    // Records this old were never published, so every fetch fails, whether
    // as a non-200 response or as a transport error.
    let args = cli::download::Args {
        dir: dir.clone(),
        start_year: 1900,
        start_month: 1,
        end_year: 1900,
        end_month: 2,
        ..Default::default()
    };

    let error = download::trip_data(&args).await.unwrap_err();

    // One bad month never aborts the rest: both failures end up in the count.
    assert!(error.to_string().contains("2 of 2"));

    // The output directory is created, but no partial files land in it.
    assert!(dir.exists());
    assert_eq!(read_dir(&dir)?.count(), 0);

    Ok(())
}

// ----------------------------------------------------------------------------
// Dataset List

#[test]
fn list_datasets() -> Result<(), Report> {
    // Unfiltered, the table carries one row per dataset.
    let args = cli::list::Args { name: None };
    let markdown = list::datasets(&args)?;
    assert!(markdown.contains("First Month"));
    for row in [
        "yellow_tripdata_2009-01.parquet",
        "green_tripdata_2013-08.parquet",
        "fhvhv_tripdata_2019-02.parquet",
        "fhv_tripdata_2015-01.parquet",
    ] {
        assert!(markdown.contains(row));
    }

    // The name filter restricts the table to the requested dataset.
    let args = cli::list::Args {
        name: Some(Name::Green),
    };
    let markdown = list::datasets(&args)?;
    assert!(markdown.contains("green_tripdata_2013-08.parquet"));
    assert!(!markdown.contains("yellow_tripdata"));
    assert!(!markdown.contains("fhvhv_tripdata"));
    assert!(!markdown.contains("fhv_tripdata"));

    Ok(())
}
