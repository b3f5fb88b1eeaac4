use std::path::PathBuf;

use thiserror::Error;

/// The airport dataset could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read airport dataset '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse airport dataset '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A departures request failed. Recoverable: the search loop reports it and carries on.
#[derive(Debug, Error)]
pub enum ScheduleFetchError {
    #[error("Failed to send request to the flight schedule API")]
    Request(#[source] reqwest::Error),

    #[error("Flight schedule request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Flight schedule API reported an error: {message}")]
    Api { message: String },

    #[error("Flight schedule response has no `response` field: {body}")]
    MissingResponse { body: String },

    #[error("Failed to parse flight schedule JSON")]
    Malformed(#[source] serde_json::Error),
}

/// A country lookup failed.
#[derive(Debug, Error)]
pub enum CountryFetchError {
    #[error("Failed to send request to the countries API")]
    Request(#[source] reqwest::Error),

    #[error("Country lookup failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid countries API base URL: {base_url}")]
    InvalidUrl { base_url: String },

    #[error("No country matched the search")]
    NotFound,

    #[error("Failed to parse countries JSON")]
    Malformed(#[source] serde_json::Error),
}

/// Console input did not produce an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user backed out (Esc / Ctrl-C), or a scripted prompter ran dry.
    #[error("Prompt cancelled")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Failed(String),
}
