// Icon fetcher - Download a package icon or fall back on the default one
use crate::error::{GendeskError, Result};
use crate::resolve::capitalize;
use md5::{Digest, Md5};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `%s` is replaced by the capitalized package name
pub const ICON_SEARCH_URL: &str = "https://admin.fedoraproject.org/pkgdb/appicon/show/%s";
pub const DEFAULT_ICON: &str = "/usr/share/pixmaps/default.png";

/// MD5 of the image the search service returns when it has no icon
const PLACEHOLDER_ICON_MD5: &str = "12928aa3233965175ea30f5acae593bf";

pub fn md5_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub fn is_placeholder_icon(bytes: &[u8]) -> bool {
    md5_hex(bytes) == PLACEHOLDER_ICON_MD5
}

/// Is there already a PNG in the directory?
pub fn has_png(dir: &Path) -> bool {
    let pattern = format!(
        "{}/*.png",
        glob::Pattern::escape(&dir.display().to_string())
    );
    glob::glob(&pattern)
        .map(|mut paths| paths.any(|path| path.is_ok()))
        .unwrap_or(false)
}

pub fn icon_path(dir: &Path, package: &str) -> PathBuf {
    dir.join(format!("{}.png", package))
}

pub struct IconFetcher {
    client: reqwest::Client,
    search_url: String,
    default_icon: PathBuf,
    output_dir: PathBuf,
}

impl IconFetcher {
    pub fn new(search_url: String, default_icon: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            search_url,
            default_icon,
            output_dir,
        }
    }

    pub fn search_url(&self, package: &str) -> String {
        self.search_url.replace("%s", &capitalize(package))
    }

    /// An icon is only fetched when the descriptor doesn't download one itself and
    /// none is lying around already
    pub fn needs_icon(&self, icon_url: Option<&str>) -> bool {
        if let Some(url) = icon_url {
            debug!("Descriptor downloads its own icon from {}", url);
            return false;
        }
        !has_png(&self.output_dir)
    }

    /// Fetch the icon from the search service into `<pkgname>.png`
    pub async fn download(&self, package: &str) -> Result<PathBuf> {
        let url = self.search_url(package);
        debug!("Fetching icon from {}", url);

        let bytes = self
            .fetch(&url)
            .await
            .map_err(|source| GendeskError::Download {
                url: url.clone(),
                source,
            })?;
        if is_placeholder_icon(&bytes) {
            return Err(GendeskError::NoIconFound(package.to_string()));
        }

        let path = icon_path(&self.output_dir, package);
        fs::write(&path, &bytes).map_err(|source| GendeskError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    async fn fetch(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Copy the system default icon to `<pkgname>.png`
    pub fn use_default(&self, package: &str) -> Result<PathBuf> {
        let bytes = fs::read(&self.default_icon).map_err(|source| GendeskError::DefaultIconRead {
            path: self.default_icon.clone(),
            source,
        })?;
        let path = icon_path(&self.output_dir, package);
        fs::write(&path, bytes).map_err(|source| GendeskError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
