//! Errors raised while pulling a collection from the backend.
//!
//! They never reach the presentation layer directly: the fetch runtime turns
//! each one into a `Failed` action carrying its `Display` text.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status. `status_text` is empty
    /// for codes without a registered reason phrase.
    #[error("Error {status}{}", reason_suffix(.status_text))]
    Status { status: u16, status_text: String },

    /// The request never completed.
    #[error("{0}")]
    Network(String),

    /// The body was not a JSON array of the expected records.
    #[error("Invalid response body: {0}")]
    Parse(String),
}

fn reason_suffix(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(": {status_text}")
    }
}
