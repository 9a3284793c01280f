pub mod prompt;
pub mod view;

use serde_json::Value;

use crate::client::{LogQuery, LogsClient};
use crate::error::Result;
use crate::models::Service;

/// A fully collected query, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    CloudwatchLogs(LogQuery),
}

impl Request {
    pub fn service(&self) -> Service {
        match self {
            Request::CloudwatchLogs(_) => Service::CloudwatchLogs,
        }
    }
}

pub async fn dispatch<C: LogsClient + Sync>(client: &C, request: &Request) -> Result<Value> {
    match request {
        Request::CloudwatchLogs(query) => client.filter_log_events(query).await,
    }
}
