use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub url: String,
    /// File size observed when the local file was opened, not bytes on the wire.
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorKind {
    /// Local file could not be opened, stat'd, or is not a regular file.
    LocalFile,
    /// Target URL or request could not be built.
    InvalidRequest,
    /// Connection, DNS, IO, or body stream failure.
    Transport,
    /// The upload deadline expired before a response arrived.
    Timeout,
    /// The server answered outside 2xx.
    Status(u16),
}

/// Upload failure tagged with the mechanism that produced it.
///
/// Travels inside `anyhow::Error`; callers recover it with
/// `err.downcast_ref::<UploadError>()`.
#[derive(Debug)]
pub struct UploadError {
    mechanism: &'static str,
    kind: UploadErrorKind,
    message: String,
    source: Option<anyhow::Error>,
}

impl UploadError {
    pub fn new(
        mechanism: &'static str,
        kind: UploadErrorKind,
        message: impl Into<String>,
    ) -> anyhow::Error {
        anyhow::Error::new(Self {
            mechanism,
            kind,
            message: message.into(),
            source: None,
        })
    }

    pub fn with_source(
        mechanism: &'static str,
        kind: UploadErrorKind,
        message: impl Into<String>,
        source: anyhow::Error,
    ) -> anyhow::Error {
        anyhow::Error::new(Self {
            mechanism,
            kind,
            message: message.into(),
            source: Some(source),
        })
    }

    pub fn mechanism(&self) -> &'static str {
        self.mechanism
    }

    pub fn kind(&self) -> UploadErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            UploadErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == UploadErrorKind::Timeout
    }
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} upload failed: {}", self.mechanism, self.message)
    }
}

impl StdError for UploadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|err| err.as_ref())
    }
}
