use std::io;
use std::time::Duration;

use humantime::{format_duration, FormattedDuration};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("AWS CLI is not installed")]
    CliNotInstalled,

    #[error("Not logged in to AWS with the provided profile")]
    NotLoggedIn,

    #[error("Invalid datetime format: {0:?}")]
    InvalidDatetime(String),

    #[error("Invalid time range: start {start}, end {end}")]
    InvalidTimeRange { start: i64, end: i64 },

    #[error("Error querying CloudWatch logs: {stderr}")]
    QueryFailed { stderr: String },

    #[error("Failed to parse AWS CLI output: {0}")]
    InvalidOutput(#[source] serde_json::Error),

    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),

    #[error("`{program}` did not exit within {}", display_timeout(.timeout))]
    Timeout { program: String, timeout: Duration },

    #[error("Failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("No input for {0:?}")]
    MissingInput(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn display_timeout(timeout: &Duration) -> FormattedDuration {
    format_duration(*timeout)
}
