// ABOUTME: Error types for feed rendering operations.
// ABOUTME: Provides FeedError enum with MalformedTree, Xml, Io, and Utf8 variants.

use thiserror::Error;

/// Errors that can occur while rendering a feed document.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The intermediate tree cannot be expressed as XML.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// The XML writer rejected an event.
    #[error("failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The underlying sink failed.
    #[error("failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    /// The writer produced bytes that are not UTF-8.
    #[error("rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl FeedError {
    /// Creates a MalformedTree error with a custom message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        FeedError::MalformedTree(msg.into())
    }
}
