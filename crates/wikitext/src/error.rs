// ABOUTME: Error types for wikitext including the ErrorCode enum and ExtractError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of extraction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    Fetch,
    TitleNotFound,
    BodyNotFound,
    Io,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::TitleNotFound => "article title not found",
            ErrorCode::BodyNotFound => "article body not found",
            ErrorCode::Io => "I/O error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for fetch and extraction operations.
///
/// `source_ref` is the URL or file path the document came from; it is empty
/// when the caller handed us a document without naming it.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub source_ref: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wikitext: {}", self.op)?;
        if !self.source_ref.is_empty() {
            write!(f, " {}", self.source_ref)?;
        }
        write!(f, ": {}", self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    fn new(
        code: ErrorCode,
        source_ref: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            source_ref: source_ref.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, url, op, source)
    }

    /// Create a TitleNotFound error.
    pub fn title_not_found(source_ref: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::TitleNotFound, source_ref, op, None)
    }

    /// Create a BodyNotFound error.
    pub fn body_not_found(source_ref: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::BodyNotFound, source_ref, op, None)
    }

    /// Create an Io error.
    pub fn io(
        path: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Io, path, op, source)
    }

    /// Attach the document's URL or path when the error was raised without one.
    pub fn with_source_ref(mut self, source_ref: impl Into<String>) -> Self {
        if self.source_ref.is_empty() {
            self.source_ref = source_ref.into();
        }
        self
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a TitleNotFound error.
    pub fn is_title_not_found(&self) -> bool {
        self.code == ErrorCode::TitleNotFound
    }

    /// Returns true if this is a BodyNotFound error.
    pub fn is_body_not_found(&self) -> bool {
        self.code == ErrorCode::BodyNotFound
    }

    /// Returns true if this is an Io error.
    pub fn is_io(&self) -> bool {
        self.code == ErrorCode::Io
    }
}
