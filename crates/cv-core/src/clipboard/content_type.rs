use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coarse classification of a clipboard payload.
///
/// 剪贴板内容的粗粒度分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Json,
    Url,
    Multiline,
    Text,
}

impl ContentType {
    /// Classify raw clipboard text.
    ///
    /// Checks are ordered: JSON-looking prefix, then URL scheme, then line
    /// count. Only the leading bracket is inspected here; whether the text
    /// actually parses is decided by the validator.
    pub fn detect(content: &str) -> Self {
        let head = content.trim_start();
        if head.starts_with('{') || head.starts_with('[') {
            Self::Json
        } else if content.starts_with("http://") || content.starts_with("https://") {
            Self::Url
        } else if content.lines().count() > 1 {
            Self::Multiline
        } else {
            Self::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Url => "url",
            Self::Multiline => "multiline",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct ContentTypeParseError(String);

impl FromStr for ContentType {
    type Err = ContentTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "url" => Ok(Self::Url),
            "multiline" => Ok(Self::Multiline),
            "text" => Ok(Self::Text),
            other => Err(ContentTypeParseError(other.to_string())),
        }
    }
}
