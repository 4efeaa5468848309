//! Configuration constants for FontAwesome metadata downloads.

/// FontAwesome Free release fetched by default.
pub const FONTAWESOME_VERSION: &str = "6.5.2";

/// Base URL of FontAwesome release assets.
pub const FONTAWESOME_RELEASE_URL: &str =
    "https://github.com/FortAwesome/Font-Awesome/releases/download";

/// Metadata filename, inside the release archive and on disk.
pub const METADATA_FILENAME: &str = "icons.json";

/// License filename, inside the release archive and on disk.
pub const LICENSE_FILENAME: &str = "LICENSE.txt";

/// Directory name at the root of the desktop release archive.
pub fn release_dir(version: &str) -> String {
    format!("fontawesome-free-{version}-desktop")
}

/// Desktop release archive URL.
pub fn release_zip_url(version: &str) -> String {
    format!("{FONTAWESOME_RELEASE_URL}/{version}/{}.zip", release_dir(version))
}

/// Path to the metadata inside the release archive.
pub fn metadata_zip_path(version: &str) -> String {
    format!("{}/metadata/{METADATA_FILENAME}", release_dir(version))
}

/// Path to the license inside the release archive.
pub fn license_zip_path(version: &str) -> String {
    format!("{}/{LICENSE_FILENAME}", release_dir(version))
}
