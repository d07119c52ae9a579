use anyhow::{Context, Result};

use super::config_model::{DotEnvyConfig, PutUpload};

const DEFAULT_TIMEOUT_SECS: &str = "300";

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let put_upload = PutUpload {
        endpoint: std::env::var("PUT_UPLOAD_ENDPOINT").context("PUT_UPLOAD_ENDPOINT is invalid")?,
        timeout_secs: std::env::var("PUT_UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("PUT_UPLOAD_TIMEOUT_SECS is invalid")?,
    };

    Ok(DotEnvyConfig { put_upload })
}
