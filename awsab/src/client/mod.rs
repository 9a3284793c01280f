mod command;
mod identity;
mod query;
mod types;

pub use command::*;
pub use types::*;

use crate::error::Result;

/// A handle on the AWS CLI that has passed the install and login checks.
#[derive(Debug, Clone)]
pub struct Client<R> {
    runner: R,
    profile: Option<String>,
}

impl<R: CommandRunner> Client<R> {
    /// Verifies the CLI is installed and the profile resolves to an identity.
    /// No `Client` exists unless both checks pass.
    pub async fn connect(runner: R, profile: Option<String>) -> Result<Self> {
        let client = Self { runner, profile };
        client.check_installed().await?;
        client.check_login().await?;
        Ok(client)
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    fn with_profile(&self, mut args: Vec<String>) -> Vec<String> {
        if let Some(ref profile) = self.profile {
            args.push("--profile".to_owned());
            args.push(profile.clone());
        }
        args
    }
}
