pub mod download;
pub mod list;
pub mod month;

use crate::dataset::month::TripMonth;
use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumProperty, IntoEnumIterator};
use url::Url;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Fixed remote location that serves the monthly trip record files.
pub const TRIP_DATA_URL: &str = "https://d37ci6vzurychx.cloudfront.net/trip-data";

// ----------------------------------------------------------------------------
// Dataset Name

#[derive(Clone, Copy, Debug, Default, EnumIter, EnumProperty, Eq, PartialEq)]
pub enum Name {
    #[default]
    #[strum(props(first_month = "2009-01"))]
    Yellow,
    #[strum(props(first_month = "2013-08"))]
    Green,
    #[strum(props(first_month = "2019-02"))]
    Fhvhv,
    #[strum(props(first_month = "2015-01"))]
    Fhv,
}

impl Name {
    /// Earliest month with published data for this dataset.
    pub fn first_month(&self) -> Result<TripMonth, Report> {
        let first = self
            .get_str("first_month")
            .ok_or_else(|| eyre!("Dataset {self} has no first_month property."))?;
        TripMonth::from_str(first)
    }

    /// File name of one month of trip records, as published remotely.
    pub fn remote_key(&self, month: &TripMonth) -> String {
        format!("{self}_tripdata_{month}.parquet")
    }

    /// Full download URL of one month of trip records.
    pub fn remote_url(&self, month: &TripMonth) -> Result<Url, Report> {
        let url = Url::parse(&format!("{TRIP_DATA_URL}/{}", self.remote_key(month)))?;
        Ok(url)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Name::Yellow => String::from("yellow"),
            Name::Green => String::from("green"),
            Name::Fhvhv => String::from("fhvhv"),
            Name::Fhv => String::from("fhv"),
        };

        write!(f, "{}", name)
    }
}

impl FromStr for Name {
    type Err = Report;

    fn from_str(name: &str) -> Result<Self, Report> {
        let name = match name.to_lowercase().as_str() {
            "yellow" => Name::Yellow,
            "green" => Name::Green,
            "fhvhv" => Name::Fhvhv,
            "fhv" => Name::Fhv,
            _ => Err(eyre!("Unknown dataset name: {name}")).suggestion(format!(
                "Please choose from: {}",
                Name::iter().join(", ")
            ))?,
        };

        Ok(name)
    }
}
