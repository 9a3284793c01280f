use std::fmt;

/// A query type selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    CloudwatchLogs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    LogGroup,
    StartTime,
    EndTime,
    FilterPattern,
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKey::LogGroup => "log group",
            ParamKey::StartTime => "start time",
            ParamKey::EndTime => "end time",
            ParamKey::FilterPattern => "filter pattern",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub key: ParamKey,
    pub prompt: &'static str,
}

const CLOUDWATCH_LOGS_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        key: ParamKey::LogGroup,
        prompt: "Enter CloudWatch log group name: ",
    },
    ParamSpec {
        key: ParamKey::StartTime,
        prompt: "Enter start datetime: ",
    },
    ParamSpec {
        key: ParamKey::EndTime,
        prompt: "Enter end datetime: ",
    },
    ParamSpec {
        key: ParamKey::FilterPattern,
        prompt: "Enter filter pattern for CloudWatch logs: ",
    },
];

impl Service {
    pub fn description(&self) -> &'static str {
        match self {
            Service::CloudwatchLogs => "Query CloudWatch logs",
        }
    }

    /// Parameters in the order they are prompted for.
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            Service::CloudwatchLogs => CLOUDWATCH_LOGS_PARAMS,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Service::CloudwatchLogs => "CloudWatch Log Events:",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudwatch_logs_prompts_in_order() {
        let keys: Vec<ParamKey> = Service::CloudwatchLogs
            .params()
            .iter()
            .map(|p| p.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                ParamKey::LogGroup,
                ParamKey::StartTime,
                ParamKey::EndTime,
                ParamKey::FilterPattern
            ]
        );
    }
}
