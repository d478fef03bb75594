pub mod remote_file;
pub mod table;

use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use std::fs::write;
use std::path::Path;

/// Download file from url to path.
pub async fn download_file(url: &str, output_path: &Path) -> Result<(), Report> {
    let response = reqwest::get(url).await?;
    if response.status() != 200 {
        return Err(eyre!(
            "Unable to download file: {url}\nStatus code {}.",
            response.status()
        ));
    }

    // Trip record files are parquet, store the bytes untouched.
    let content = response.bytes().await?;
    write(output_path, content)
        .wrap_err_with(|| eyre!("Unable to write file: {output_path:?}"))?;

    Ok(())
}
