use std::{fmt::Display, str::FromStr};

/// Kind of artifact the egress pipeline produced.
///
/// Uploaders accept it as a hint only; the content type sent on the wire is
/// derived from the local file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputType {
    #[default]
    Unknown,
    Raw,
    Ogg,
    Ivf,
    Mp4,
    Ts,
    WebM,
    Rtmp,
    Srt,
    Hls,
    Json,
    Blob,
}

impl OutputType {
    pub const ALL: [OutputType; 12] = [
        OutputType::Unknown,
        OutputType::Raw,
        OutputType::Ogg,
        OutputType::Ivf,
        OutputType::Mp4,
        OutputType::Ts,
        OutputType::WebM,
        OutputType::Rtmp,
        OutputType::Srt,
        OutputType::Hls,
        OutputType::Json,
        OutputType::Blob,
    ];

    pub fn as_mime(&self) -> &'static str {
        match self {
            OutputType::Unknown => "",
            OutputType::Raw => "audio/x-raw",
            OutputType::Ogg => "audio/ogg",
            OutputType::Ivf => "video/x-ivf",
            OutputType::Mp4 => "video/mp4",
            OutputType::Ts => "video/mp2t",
            OutputType::WebM => "video/webm",
            OutputType::Rtmp => "rtmp",
            OutputType::Srt => "srt",
            OutputType::Hls => "application/x-mpegurl",
            OutputType::Json => "application/json",
            OutputType::Blob => "application/octet-stream",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            OutputType::Unknown => "unknown",
            OutputType::Raw => "raw",
            OutputType::Ogg => "ogg",
            OutputType::Ivf => "ivf",
            OutputType::Mp4 => "mp4",
            OutputType::Ts => "ts",
            OutputType::WebM => "webm",
            OutputType::Rtmp => "rtmp",
            OutputType::Srt => "srt",
            OutputType::Hls => "hls",
            OutputType::Json => "json",
            OutputType::Blob => "blob",
        }
    }
}

impl Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for OutputType {
    type Err = String;

    /// Accepts either the short name (`mp4`) or the MIME string (`video/mp4`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();
        if value.is_empty() {
            return Ok(OutputType::Unknown);
        }

        OutputType::ALL
            .into_iter()
            .find(|output_type| output_type.short_name() == value || output_type.as_mime() == value)
            .ok_or_else(|| format!("Unsupported output type: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_names_and_mime_strings() {
        assert_eq!("mp4".parse::<OutputType>().unwrap(), OutputType::Mp4);
        assert_eq!("video/mp4".parse::<OutputType>().unwrap(), OutputType::Mp4);
        assert_eq!(
            "Application/X-MPEGURL".parse::<OutputType>().unwrap(),
            OutputType::Hls
        );
        assert_eq!(" webm ".parse::<OutputType>().unwrap(), OutputType::WebM);
    }

    #[test]
    fn empty_string_is_unknown() {
        assert_eq!("".parse::<OutputType>().unwrap(), OutputType::Unknown);
        assert_eq!(OutputType::default(), OutputType::Unknown);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for output_type in OutputType::ALL {
            assert_eq!(
                output_type.to_string().parse::<OutputType>().unwrap(),
                output_type
            );
        }
    }

    #[test]
    fn rejects_unsupported_values() {
        let err = "video/x-matroska".parse::<OutputType>().unwrap_err();
        assert!(err.contains("video/x-matroska"));
    }
}
