use crate::traits::UiAssetProvider;
use crate::{Error, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::PathBuf;
use tokio::fs;

/// A UI asset provider that reads files directly from disk, so UI edits
/// show up on refresh. Development only; deployments use the embedded
/// bundle.
pub struct DiskFrontend {
    root: PathBuf,
}

impl DiskFrontend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl UiAssetProvider for DiskFrontend {
    async fn get_asset(&self, path: &str) -> Result<(Cow<'static, [u8]>, String)> {
        // Reject directory traversal outright.
        if path.contains("..") {
            return Err(Error::AssetNotFound(path.to_string()));
        }

        let asset_path = self.root.join(path);
        let content = fs::read(asset_path)
            .await
            .map_err(|_| Error::AssetNotFound(path.to_string()))?;

        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok((Cow::Owned(content), mime))
    }
}
