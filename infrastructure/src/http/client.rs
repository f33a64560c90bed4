//! Shared HTTP client construction and error classification

use std::error::Error as _;
use std::time::Duration;
use thiserror::Error;

/// Errors that prevent the pipeline from starting at all
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build the connection pool shared by every request of a run
///
/// `reqwest::Client` is internally reference counted, so clones handed to the
/// generator and the store reuse the same pool.
pub fn build_http_client(connect_timeout: Duration) -> Result<reqwest::Client, SetupError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("trivia-generator/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(connect_timeout)
        .build()?;
    Ok(client)
}

/// Render a reqwest error together with its source chain
///
/// The top-level message ("error sending request for url ...") rarely says
/// what went wrong; the cause usually sits a few sources down.
pub(crate) fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
