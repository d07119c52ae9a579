use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub put_upload: PutUpload,
}

#[derive(Debug, Clone)]
pub struct PutUpload {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl PutUpload {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
