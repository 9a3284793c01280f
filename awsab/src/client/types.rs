use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::TimeValue;

/// A log query as collected from flags and prompts, times not yet normalized.
#[derive(Debug, PartialEq, Clone)]
pub struct LogQuery {
    pub log_group: String,
    pub start_time: TimeValue,
    pub end_time: TimeValue,
    pub filter_pattern: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FilterLogEventsInput {
    pub log_group: String,
    /// Epoch seconds.
    pub start: i64,
    /// Epoch seconds.
    pub end: i64,
    pub pattern: String,
}

impl FilterLogEventsInput {
    pub fn from_query(query: &LogQuery) -> Result<Self> {
        let start = query.start_time.to_epoch()?;
        let end = query.end_time.to_epoch()?;
        // start must not follow end, and both must fit as milliseconds
        if start > end || start.checked_mul(1000).is_none() || end.checked_mul(1000).is_none() {
            return Err(Error::InvalidTimeRange { start, end });
        }
        Ok(Self {
            log_group: query.log_group.clone(),
            start,
            end,
            pattern: query.filter_pattern.clone(),
        })
    }

    /// Arguments for `aws logs filter-log-events`. The API takes
    /// milliseconds, so both ends are scaled here.
    pub fn args(&self) -> Vec<String> {
        vec![
            "logs".to_owned(),
            "filter-log-events".to_owned(),
            "--log-group-name".to_owned(),
            self.log_group.clone(),
            "--start-time".to_owned(),
            self.start.saturating_mul(1000).to_string(),
            "--end-time".to_owned(),
            self.end.saturating_mul(1000).to_string(),
            "--filter-pattern".to_owned(),
            self.pattern.clone(),
        ]
    }
}

#[async_trait]
pub trait LogsClient {
    /// Runs `logs filter-log-events` and returns the parsed response.
    async fn filter_log_events(&self, query: &LogQuery) -> Result<Value>;
}
