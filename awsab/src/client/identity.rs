use serde_json::Value;

use super::*;
use crate::error::Error;

impl<R: CommandRunner> Client<R> {
    pub(super) async fn check_installed(&self) -> Result<()> {
        log::debug!("check aws cli is installed");
        match self.runner.run(&["--version".to_owned()]).await {
            Ok(out) if out.success => {
                log::info!("found {}", out.stdout.trim());
                Ok(())
            }
            Ok(out) => {
                log::warn!("aws --version failed: {}", out.stderr.trim());
                Err(Error::CliNotInstalled)
            }
            Err(e @ Error::Timeout { .. }) => Err(e),
            Err(e) => {
                log::warn!("aws --version failed: {}", e);
                Err(Error::CliNotInstalled)
            }
        }
    }

    pub(super) async fn check_login(&self) -> Result<()> {
        log::debug!("check caller identity for profile {:?}", self.profile);
        let args = self.with_profile(vec!["sts".to_owned(), "get-caller-identity".to_owned()]);
        let out = self.runner.run(&args).await?;
        if !(out.success && out.stderr.is_empty() && !out.stdout.is_empty()) {
            log::warn!(
                "get-caller-identity failed (success: {}): {}",
                out.success,
                out.stderr.trim()
            );
            return Err(Error::NotLoggedIn);
        }

        let arn = serde_json::from_str::<Value>(&out.stdout)
            .ok()
            .and_then(|v| v.get("Arn").and_then(Value::as_str).map(str::to_owned));
        log::info!("logged in as {}", arn.as_deref().unwrap_or("<unknown>"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::ScriptedRunner;

    const VERSION: &str = "aws-cli/2.15.0 Python/3.11.6 Linux/6.1 exe/x86_64\n";
    const IDENTITY: &str = r#"{"Arn":"arn:aws:iam::123456789012:user/dev"}"#;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn connects_when_installed_and_logged_in() {
        let client = Client::connect(ScriptedRunner::logged_in(), None).await.unwrap();
        assert_eq!(
            client.runner.calls(),
            vec![args(&["--version"]), args(&["sts", "get-caller-identity"])]
        );
    }

    #[tokio::test]
    async fn identity_probe_is_scoped_to_profile() {
        let client = Client::connect(ScriptedRunner::logged_in(), Some("staging".to_owned()))
            .await
            .unwrap();
        assert_eq!(
            client.runner.calls()[1],
            args(&["sts", "get-caller-identity", "--profile", "staging"])
        );
        assert_eq!(client.profile(), Some("staging"));
    }

    #[tokio::test]
    async fn failing_version_probe_is_not_installed() {
        let runner = ScriptedRunner::new().fail("command not found");
        let err = Client::connect(runner, None).await.unwrap_err();
        assert!(matches!(err, Error::CliNotInstalled));
        assert_eq!(err.to_string(), "AWS CLI is not installed");
    }

    #[tokio::test]
    async fn missing_binary_is_not_installed() {
        let runner = ScriptedRunner::new().reply(Err(Error::Spawn {
            program: "aws".to_owned(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }));
        let err = Client::connect(runner, None).await.unwrap_err();
        assert!(matches!(err, Error::CliNotInstalled));
    }

    #[tokio::test]
    async fn version_probe_timeout_is_reported_as_timeout() {
        let runner = ScriptedRunner::new().reply(Err(Error::Timeout {
            program: "aws".to_owned(),
            timeout: std::time::Duration::from_secs(60),
        }));
        let err = Client::connect(runner, None).await.unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }

    #[tokio::test]
    async fn identity_probe_requires_zero_exit() {
        let runner = ScriptedRunner::new()
            .ok(VERSION)
            .reply(Ok(CommandOutput::new(false, IDENTITY, "")));
        let err = Client::connect(runner, None).await.unwrap_err();
        assert!(matches!(err, Error::NotLoggedIn));
    }

    #[tokio::test]
    async fn identity_probe_requires_empty_stderr() {
        let runner = ScriptedRunner::new().ok(VERSION).reply(Ok(CommandOutput::new(
            true,
            IDENTITY,
            "The config profile (dev) could not be found",
        )));
        let err = Client::connect(runner, None).await.unwrap_err();
        assert!(matches!(err, Error::NotLoggedIn));
    }

    #[tokio::test]
    async fn identity_probe_requires_stdout() {
        let runner = ScriptedRunner::new().ok(VERSION).ok("");
        let err = Client::connect(runner, None).await.unwrap_err();
        assert!(matches!(err, Error::NotLoggedIn));
        assert_eq!(err.to_string(), "Not logged in to AWS with the provided profile");
    }

    #[tokio::test]
    async fn unparseable_identity_still_counts_as_logged_in() {
        let runner = ScriptedRunner::new()
            .ok(VERSION)
            .ok("arn:aws:iam::123:user/dev\n");
        assert!(Client::connect(runner, None).await.is_ok());
    }
}
