use thiserror::Error;

/// Errors that can occur while fetching a recipe page.
///
/// Extraction itself never fails; everything here belongs to the HTTP layer
/// above the extractor.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the page from its URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),
}
