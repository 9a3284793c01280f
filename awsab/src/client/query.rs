use async_trait::async_trait;
use serde_json::Value;

use super::*;
use crate::error::Error;

#[async_trait]
impl<R: CommandRunner> LogsClient for Client<R> {
    async fn filter_log_events(&self, query: &LogQuery) -> Result<Value> {
        let input = FilterLogEventsInput::from_query(query)?;
        log::debug!("filter log events {:?}", input);

        let out = self.runner.run(&self.with_profile(input.args())).await?;
        if !out.success {
            log::warn!("filter-log-events failed: {}", out.stderr.trim());
            return Err(Error::QueryFailed { stderr: out.stderr });
        }

        let value: Value = serde_json::from_str(&out.stdout).map_err(Error::InvalidOutput)?;
        log::trace!("filter log events response is {:?}", value);
        Ok(value)
    }
}
