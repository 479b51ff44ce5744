//! Copying local media next to the generated deck.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::DEFAULT_ASSET_URL_PREFIX;
use crate::errors::{GenerationError, Result};

/// Makes a media file referenced by a relative URL available to the viewer.
///
/// Implementations must be idempotent: copying the same URL twice yields the
/// same output URL and leaves the output unchanged.
pub trait AssetCopier {
    /// Copies the asset and returns the URL the markup should reference.
    fn copy_asset(&self, relative_url: &str) -> Result<String>;
}

/// Resolves the URL a media element should point at.
///
/// Absolute `http://` and `https://` URLs pass through untouched; anything
/// else is handed to the asset copier.
pub fn media_src(url: &str, assets: &dyn AssetCopier) -> Result<String> {
    if is_absolute_url(url) {
        return Ok(url.to_string());
    }
    assets.copy_asset(url)
}

pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Copies assets from a source directory into an output directory.
#[derive(Debug)]
pub struct FsAssetCopier {
    source_dir: PathBuf,
    output_dir: PathBuf,
    url_prefix: String,
    copied: RefCell<HashSet<String>>,
}

impl FsAssetCopier {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            url_prefix: DEFAULT_ASSET_URL_PREFIX.to_string(),
            copied: RefCell::new(HashSet::new()),
        }
    }

    /// Sets the prefix prepended to the relative URL in the generated markup.
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl AssetCopier for FsAssetCopier {
    fn copy_asset(&self, relative_url: &str) -> Result<String> {
        let output_url = format!("{}{}", self.url_prefix, relative_url);
        if self.copied.borrow().contains(relative_url) {
            return Ok(output_url);
        }

        let src = self.source_dir.join(relative_url);
        let dest = self.output_dir.join(relative_url);
        let to_asset_error = |source: std::io::Error| GenerationError::Asset {
            url: relative_url.to_string(),
            source_path: src.clone(),
            source,
        };

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(to_asset_error)?;
        }
        fs::copy(&src, &dest).map_err(to_asset_error)?;
        debug!("Copied asset {} -> {}", src.display(), dest.display());

        self.copied.borrow_mut().insert(relative_url.to_string());
        Ok(output_url)
    }
}

/// Rewrites relative URLs to the asset prefix without touching the filesystem.
/// Used where the caller ships assets itself (wasm, tests).
#[derive(Debug, Clone)]
pub struct PassthroughAssets {
    url_prefix: String,
}

impl PassthroughAssets {
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self {
            url_prefix: url_prefix.into(),
        }
    }
}

impl Default for PassthroughAssets {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_URL_PREFIX)
    }
}

impl AssetCopier for PassthroughAssets {
    fn copy_asset(&self, relative_url: &str) -> Result<String> {
        Ok(format!("{}{}", self.url_prefix, relative_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let unique = format!("slidedeck-gen-{}-{}-{}", name, std::process::id(), nanos);
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let assets = PassthroughAssets::default();
        assert_eq!(
            media_src("https://example.com/a.png", &assets).unwrap(),
            "https://example.com/a.png"
        );
        assert_eq!(
            media_src("http://example.com/a.png", &assets).unwrap(),
            "http://example.com/a.png"
        );
        assert_eq!(media_src("img/a.png", &assets).unwrap(), "./assets/img/a.png");
    }

    #[test]
    fn test_fs_copier_copies_once_and_is_idempotent() {
        let src = scratch_dir("src");
        let out = scratch_dir("out");
        fs::create_dir_all(src.join("img")).unwrap();
        fs::write(src.join("img/logo.png"), b"png").unwrap();

        let copier = FsAssetCopier::new(&src, &out);
        assert_eq!(copier.copy_asset("img/logo.png").unwrap(), "./assets/img/logo.png");
        assert_eq!(fs::read(out.join("img/logo.png")).unwrap(), b"png");

        // Second copy is served from the memo even if the source disappears.
        fs::remove_file(src.join("img/logo.png")).unwrap();
        assert_eq!(copier.copy_asset("img/logo.png").unwrap(), "./assets/img/logo.png");

        let _ = fs::remove_dir_all(&src);
        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn test_fs_copier_reports_missing_source() {
        let copier = FsAssetCopier::new(scratch_dir("missing-src"), scratch_dir("missing-out"));
        let err = copier.copy_asset("nope.png").unwrap_err();
        match err {
            GenerationError::Asset { url, .. } => assert_eq!(url, "nope.png"),
            other => panic!("expected an asset error, got {:?}", other),
        }
    }
}
