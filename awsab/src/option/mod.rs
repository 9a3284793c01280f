use std::time::Duration;

use structopt::StructOpt;

use crate::models::{ParamKey, Service};

#[derive(StructOpt, Debug)]
#[structopt(name = "awsab", about = "Query AWS services through the AWS CLI.")]
pub struct Opt {
    /// AWS profile to use.
    #[structopt(short, long)]
    pub profile: Option<String>,

    /// Query CloudWatch logs.
    #[structopt(long = "cloudwatch-logs", alias = "cloudwatch_logs")]
    pub cloudwatch_logs: bool,

    /// CloudWatch log group name. Prompted for when omitted.
    #[structopt(long)]
    pub log_group: Option<String>,

    /// Start of the range: epoch seconds, a datetime like 2024-01-01T00:00:00Z,
    /// or a duration ago like 15m.
    #[structopt(long)]
    pub start_time: Option<String>,

    /// End of the range, in the same formats as --start-time.
    #[structopt(long)]
    pub end_time: Option<String>,

    /// CloudWatch Logs filter pattern.
    #[structopt(long)]
    pub filter_pattern: Option<String>,

    /// Seconds to wait for each AWS CLI invocation.
    #[structopt(long, default_value = "60")]
    pub timeout: u64,
}

/// Query parameters given on the command line. Missing ones are prompted for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub log_group: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub filter_pattern: Option<String>,
}

impl QueryParams {
    pub fn get(&self, key: ParamKey) -> Option<&str> {
        match key {
            ParamKey::LogGroup => self.log_group.as_deref(),
            ParamKey::StartTime => self.start_time.as_deref(),
            ParamKey::EndTime => self.end_time.as_deref(),
            ParamKey::FilterPattern => self.filter_pattern.as_deref(),
        }
    }

    pub fn set(&mut self, key: ParamKey, value: String) {
        let slot = match key {
            ParamKey::LogGroup => &mut self.log_group,
            ParamKey::StartTime => &mut self.start_time,
            ParamKey::EndTime => &mut self.end_time,
            ParamKey::FilterPattern => &mut self.filter_pattern,
        };
        *slot = Some(value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub profile: Option<String>,
    pub service: Option<Service>,
    pub timeout: Duration,
    pub params: QueryParams,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let service = if opt.cloudwatch_logs {
            Some(Service::CloudwatchLogs)
        } else {
            None
        };
        Self {
            profile: opt.profile,
            service,
            timeout: Duration::from_secs(opt.timeout),
            params: QueryParams {
                log_group: opt.log_group,
                start_time: opt.start_time,
                end_time: opt.end_time,
                filter_pattern: opt.filter_pattern,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Opt::from_iter_safe(std::iter::once("awsab").chain(args.iter().copied()))
            .unwrap()
            .into()
    }

    #[test]
    fn defaults_to_no_service() {
        let c = config(&[]);
        assert_eq!(c.service, None);
        assert_eq!(c.profile, None);
        assert_eq!(c.timeout, Duration::from_secs(60));
        assert_eq!(c.params, QueryParams::default());
    }

    #[test]
    fn parses_profile_and_service() {
        let c = config(&["-p", "dev", "--cloudwatch-logs"]);
        assert_eq!(c.profile.as_deref(), Some("dev"));
        assert_eq!(c.service, Some(Service::CloudwatchLogs));

        let c = config(&["--profile=prod", "--cloudwatch_logs"]);
        assert_eq!(c.profile.as_deref(), Some("prod"));
        assert_eq!(c.service, Some(Service::CloudwatchLogs));
    }

    #[test]
    fn prefills_query_params() {
        let c = config(&[
            "--cloudwatch-logs",
            "--log-group",
            "/my/group",
            "--start-time",
            "2024-01-01T00:00:00Z",
            "--end-time",
            "1704153600",
            "--filter-pattern",
            "ERROR",
            "--timeout",
            "5",
        ]);
        assert_eq!(c.params.get(ParamKey::LogGroup), Some("/my/group"));
        assert_eq!(c.params.get(ParamKey::StartTime), Some("2024-01-01T00:00:00Z"));
        assert_eq!(c.params.get(ParamKey::EndTime), Some("1704153600"));
        assert_eq!(c.params.get(ParamKey::FilterPattern), Some("ERROR"));
        assert_eq!(c.timeout, Duration::from_secs(5));
    }

    #[test]
    fn help_is_reported_as_help() {
        let err = Opt::from_iter_safe(&["awsab", "--help"]).unwrap_err();
        assert_eq!(err.kind, structopt::clap::ErrorKind::HelpDisplayed);
    }
}
