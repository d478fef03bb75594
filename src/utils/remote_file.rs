use chrono::prelude::*;
use std::default::Default;
use std::path::PathBuf;

/// One monthly trip file on the remote host, and where it lands locally.
#[derive(Clone, Debug)]
pub struct RemoteFile {
    pub url: String,
    pub local_path: PathBuf,
    pub date_downloaded: DateTime<Utc>,
}

impl Default for RemoteFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteFile {
    pub fn new() -> Self {
        RemoteFile {
            url: String::new(),
            local_path: PathBuf::new(),
            date_downloaded: DateTime::default(),
        }
    }
}
