use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::{
    repositories::uploader::Uploader,
    value_objects::{
        enums::output_types::OutputType,
        upload::{UploadError, UploadResult},
    },
};

/// Pushes one finished egress artifact through the configured uploader.
///
/// Uploaders stay silent on failure; this is where failures get logged.
pub struct UploadArtifactUseCase {
    uploader: Arc<dyn Uploader + Send + Sync>,
}

impl UploadArtifactUseCase {
    pub fn new(uploader: Arc<dyn Uploader + Send + Sync>) -> Self {
        Self { uploader }
    }

    pub async fn execute(
        &self,
        local_path: &str,
        storage_path: &str,
        output_type: OutputType,
    ) -> Result<UploadResult> {
        info!(
            path = %local_path,
            storage_path = %storage_path,
            output_type = %output_type,
            "upload_artifact: starting upload"
        );

        let result = self
            .uploader
            .upload(local_path, storage_path, output_type)
            .await
            .map_err(|err| {
                match err.downcast_ref::<UploadError>() {
                    Some(upload_err) => error!(
                        path = %local_path,
                        storage_path = %storage_path,
                        mechanism = upload_err.mechanism(),
                        kind = ?upload_err.kind(),
                        status_code = ?upload_err.status_code(),
                        error = %err,
                        "upload_artifact: upload failed"
                    ),
                    None => error!(
                        path = %local_path,
                        storage_path = %storage_path,
                        error = %err,
                        "upload_artifact: upload failed"
                    ),
                }
                err
            })?;

        info!(
            url = %result.url,
            size_bytes = result.size_bytes,
            "upload_artifact: upload completed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        repositories::uploader::MockUploader, value_objects::upload::UploadErrorKind,
    };
    use mockall::predicate::eq;

    #[tokio::test]
    async fn forwards_arguments_and_returns_result() {
        let mut uploader = MockUploader::new();
        uploader
            .expect_upload()
            .with(
                eq("/data/room-a.mp4"),
                eq("recordings/room-a.mp4"),
                eq(OutputType::Mp4),
            )
            .times(1)
            .returning(|_, storage_path, _| {
                Ok(UploadResult {
                    url: format!("https://uploads.example.com/{}", storage_path),
                    size_bytes: 2048,
                })
            });

        let usecase = UploadArtifactUseCase::new(Arc::new(uploader));
        let result = usecase
            .execute("/data/room-a.mp4", "recordings/room-a.mp4", OutputType::Mp4)
            .await
            .unwrap();

        assert_eq!(
            result.url,
            "https://uploads.example.com/recordings/room-a.mp4"
        );
        assert_eq!(result.size_bytes, 2048);
    }

    #[tokio::test]
    async fn returns_upload_error_unchanged() {
        let mut uploader = MockUploader::new();
        uploader.expect_upload().times(1).returning(|_, _, _| {
            Err(UploadError::new(
                "HTTP",
                UploadErrorKind::Status(507),
                "unexpected status code: 507",
            ))
        });

        let usecase = UploadArtifactUseCase::new(Arc::new(uploader));
        let err = usecase
            .execute("/data/room-a.m3u8", "live/room-a.m3u8", OutputType::Hls)
            .await
            .unwrap_err();

        let upload_err = err.downcast_ref::<UploadError>().unwrap();
        assert_eq!(upload_err.mechanism(), "HTTP");
        assert_eq!(upload_err.status_code(), Some(507));
    }

    #[tokio::test]
    async fn passes_through_foreign_errors() {
        let mut uploader = MockUploader::new();
        uploader
            .expect_upload()
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("uploader misconfigured")));

        let usecase = UploadArtifactUseCase::new(Arc::new(uploader));
        let err = usecase
            .execute("/data/a.ogg", "a.ogg", OutputType::Ogg)
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<UploadError>().is_none());
        assert_eq!(err.to_string(), "uploader misconfigured");
    }
}
