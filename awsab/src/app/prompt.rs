use std::io::{BufRead, Write};

use super::Request;
use crate::client::LogQuery;
use crate::error::{Error, Result};
use crate::models::{ParamKey, Service};
use crate::option::QueryParams;

/// Asks for every parameter `service` needs that `params` lacks, one line
/// each, and builds the request.
pub fn fill<R, W>(
    service: Service,
    params: &QueryParams,
    mut input: R,
    mut output: W,
) -> Result<Request>
where
    R: BufRead,
    W: Write,
{
    let mut params = params.clone();
    for spec in service.params() {
        if params.get(spec.key).is_some() {
            continue;
        }
        output.write_all(spec.prompt.as_bytes())?;
        output.flush()?;

        let value =
            read_line(&mut input)?.ok_or_else(|| Error::MissingInput(spec.key.to_string()))?;
        log::debug!("read {} from prompt", spec.key);
        params.set(spec.key, value);
    }

    let take = |key: ParamKey| -> Result<String> {
        params
            .get(key)
            .map(str::to_owned)
            .ok_or_else(|| Error::MissingInput(key.to_string()))
    };
    match service {
        Service::CloudwatchLogs => Ok(Request::CloudwatchLogs(LogQuery {
            log_group: take(ParamKey::LogGroup)?,
            start_time: take(ParamKey::StartTime)?.into(),
            end_time: take(ParamKey::EndTime)?.into(),
            filter_pattern: take(ParamKey::FilterPattern)?,
        })),
    }
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
