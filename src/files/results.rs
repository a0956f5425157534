//! File access results

/// Content type attached to read-mode responses (raw file transfer).
pub const CONTENT_TYPE_RAW: &str = "application/octet-stream";

/// Content type attached to write-mode confirmations and listings.
pub const CONTENT_TYPE_TEXT_UTF8: &str = "text/plain; charset=utf-8";

/// Outcome of a guarded read, write, or listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContent {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    /// Always false: config state must be re-read on every request, so
    /// responses carry a no-cache directive.
    pub cacheable: bool,
}

impl FileContent {
    pub fn raw(body: Vec<u8>) -> Self {
        Self {
            body,
            content_type: CONTENT_TYPE_RAW,
            cacheable: false,
        }
    }

    pub fn text(body: Vec<u8>) -> Self {
        Self {
            body,
            content_type: CONTENT_TYPE_TEXT_UTF8,
            cacheable: false,
        }
    }

    /// Directory listing rendered one entry per line.
    pub fn listing(entries: Vec<String>) -> Self {
        Self::text(entries.join("\n").into_bytes())
    }
}
