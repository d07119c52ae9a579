use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::{enums::output_types::OutputType, upload::UploadResult};

/// One upload mechanism for finished egress artifacts.
///
/// Implementations report failures as `UploadError` tagged with their own
/// mechanism label.
#[automock]
#[async_trait]
pub trait Uploader {
    async fn upload(
        &self,
        local_path: &str,
        storage_path: &str,
        output_type: OutputType,
    ) -> Result<UploadResult>;
}
