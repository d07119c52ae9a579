use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use mime_guess::MimeGuess;
use reqwest::{
    blocking::{Body, Client},
    header::{CONTENT_LENGTH, CONTENT_TYPE},
};
use tracing::info;
use url::Url;

use crate::domain::{
    repositories::uploader::Uploader,
    value_objects::{
        enums::output_types::OutputType,
        upload::{UploadError, UploadErrorKind, UploadResult},
    },
};

const MECHANISM: &str = "HTTP";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Uploads a finished file to `{endpoint}/{storage_path}` with a single PUT.
#[derive(Clone, Debug)]
pub struct HttpPutUploader {
    endpoint: String,
    timeout: Duration,
}

impl HttpPutUploader {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Uploader for HttpPutUploader {
    async fn upload(
        &self,
        local_path: &str,
        storage_path: &str,
        _output_type: OutputType,
    ) -> Result<UploadResult> {
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;
        let local = local_path.to_string();
        let storage = storage_path.to_string();

        let result = tokio::task::spawn_blocking(move || {
            put_file(&endpoint, timeout, &local, &storage)
        })
        .await
        .map_err(|err| {
            UploadError::with_source(
                MECHANISM,
                UploadErrorKind::Transport,
                format!("upload task for {} did not complete", local_path),
                err.into(),
            )
        })??;

        info!(
            endpoint = %self.endpoint,
            path = %storage_path,
            "file uploaded successfully"
        );

        Ok(result)
    }
}

/// Runs one PUT on a single-use client.
///
/// The client owns its connections on an internal runtime thread; dropping it
/// before returning tears that runtime down, so the socket is closed on every
/// path, including a peer that stopped reading mid-body. The file is owned by
/// the request body and is closed once the request finishes or times out.
fn put_file(
    endpoint: &str,
    timeout: Duration,
    local_path: &str,
    storage_path: &str,
) -> Result<UploadResult> {
    let file = File::open(local_path).map_err(|err| {
        UploadError::with_source(
            MECHANISM,
            UploadErrorKind::LocalFile,
            format!("failed to open local file {}", local_path),
            err.into(),
        )
    })?;

    let metadata = file.metadata().map_err(|err| {
        UploadError::with_source(
            MECHANISM,
            UploadErrorKind::LocalFile,
            format!("failed to read metadata for {}", local_path),
            err.into(),
        )
    })?;
    if !metadata.is_file() {
        return Err(UploadError::new(
            MECHANISM,
            UploadErrorKind::LocalFile,
            format!("local path is not a regular file: {}", local_path),
        ));
    }

    let size_bytes = metadata.len();
    let size_bytes_i64 = i64::try_from(size_bytes).map_err(|err| {
        UploadError::with_source(
            MECHANISM,
            UploadErrorKind::LocalFile,
            format!("local file is too large: {}", local_path),
            err.into(),
        )
    })?;

    let content_type = resolve_content_type(Path::new(local_path));

    let deadline = Instant::now() + timeout;

    let request_url = format!("{}/{}", endpoint, storage_path);
    let url = Url::parse(&request_url).map_err(|err| {
        UploadError::with_source(
            MECHANISM,
            UploadErrorKind::InvalidRequest,
            format!("invalid upload url {}", request_url),
            err.into(),
        )
    })?;

    let client = Client::builder()
        .build()
        .map_err(|err| map_request_error(err, &request_url))?;

    // Declaring the length up front keeps hyper off chunked encoding.
    let status = client
        .put(url)
        .timeout(deadline.saturating_duration_since(Instant::now()))
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, size_bytes)
        .body(Body::sized(file, size_bytes))
        .send()
        .map(|response| response.status().as_u16())
        .map_err(|err| map_request_error(err, &request_url));

    drop(client);
    let status = status?;

    if !(200..=299).contains(&status) {
        return Err(UploadError::new(
            MECHANISM,
            UploadErrorKind::Status(status),
            format!("unexpected status code: {}", status),
        ));
    }

    Ok(UploadResult {
        url: request_url,
        size_bytes: size_bytes_i64,
    })
}

fn resolve_content_type(path: &Path) -> &'static str {
    MimeGuess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

fn map_request_error(err: reqwest::Error, request_url: &str) -> anyhow::Error {
    let kind = if err.is_timeout() {
        UploadErrorKind::Timeout
    } else if err.is_builder() {
        UploadErrorKind::InvalidRequest
    } else {
        UploadErrorKind::Transport
    };

    UploadError::with_source(
        MECHANISM,
        kind,
        format!("PUT {} failed", request_url),
        err.into(),
    )
}
