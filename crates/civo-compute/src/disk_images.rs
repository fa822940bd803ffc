//! Disk image endpoints.

use crate::models::DiskImage;
use crate::Result;
use async_trait::async_trait;
use civo_core::find::{find, Findable};
use civo_core::{Route, Transport};

/// Client for `/disk_images`.
#[derive(Debug, Clone)]
pub struct DiskImagesApi {
    transport: Transport,
}

impl DiskImagesApi {
    /// Create the API over a shared transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List instance disk images, excluding Kubernetes node images.
    pub async fn list(&self) -> Result<Vec<DiskImage>> {
        let images: Vec<DiskImage> = self.transport.get(Route::new("/disk_images")).await?;
        Ok(images.into_iter().filter(|image| !image.is_k3s()).collect())
    }

    /// Fetch a disk image.
    pub async fn get(&self, id: &str) -> Result<DiskImage> {
        self.transport
            .get(Route::new("/disk_images/:id").param("id", id))
            .await
    }

    /// First image whose ID or name contains `search`.
    pub async fn find(&self, search: &str) -> Result<DiskImage> {
        find(self, search).await
    }
}

#[async_trait]
impl Findable for DiskImagesApi {
    type Item = DiskImage;

    async fn list_items(&self) -> Result<Vec<DiskImage>> {
        self.list().await
    }
}
