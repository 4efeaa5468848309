use std::{
    fs::{create_dir_all, write},
    io::{Cursor, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use log::info;
use reqwest::blocking::get;
use zip::ZipArchive;

use crate::config::{
    LICENSE_FILENAME, METADATA_FILENAME, license_zip_path, metadata_zip_path, release_zip_url,
};

fn extract(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str, target: &Path) -> Result<usize> {
    let mut file = archive
        .by_name(name)
        .with_context(|| format!("File {name} not found in zip"))?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    write(target, &buffer).with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(buffer.len())
}

/// Download the FontAwesome Free release `version` and extract its icon
/// metadata and license into `out_dir`. Returns the metadata path.
pub fn download(version: &str, out_dir: &Path) -> Result<PathBuf> {
    create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;
    let url = release_zip_url(version);
    println!("Downloading FontAwesome Free {version}");
    info!("Fetching {url}");

    let response = get(&url).with_context(|| format!("Failed to fetch {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("HTTP {status} for {url}");
    }

    let bytes = response.bytes()?;
    let cursor = Cursor::new(bytes.as_ref());
    let mut archive = ZipArchive::new(cursor).context("Failed to open zip archive")?;

    let metadata = out_dir.join(METADATA_FILENAME);
    let size = extract(&mut archive, &metadata_zip_path(version), &metadata)?;
    let size_mb = size as f64 / 1024.0 / 1024.0;
    println!("  {METADATA_FILENAME} ({size_mb:.2} MB)");

    extract(&mut archive, &license_zip_path(version), &out_dir.join(LICENSE_FILENAME))?;
    println!("  {LICENSE_FILENAME}");

    println!("All files ready in {}/", out_dir.display());
    Ok(metadata)
}
