use std::time::Duration;

use clap::Parser;

use crate::{
    api::opensprinkler::{self, hash_password},
    prelude::*,
};

#[derive(Parser)]
pub struct ControllerArgs {
    /// OpenSprinkler host. For example: `http://10.0.0.1:8080`.
    #[clap(long = "host", env = "OPENSPRINKLER_HOST")]
    pub host: String,

    #[clap(flatten)]
    pub password: PasswordArgs,

    /// HTTP request timeout.
    #[clap(
        long = "timeout",
        env = "OPENSPRINKLER_TIMEOUT",
        default_value = "10s",
        value_parser = humantime::parse_duration,
    )]
    pub timeout: Duration,
}

impl ControllerArgs {
    pub fn new_client(&self) -> Result<opensprinkler::Client> {
        Ok(opensprinkler::Client::builder()
            .host(&self.host)
            .password_hash(self.password.hash()?)
            .timeout(self.timeout)
            .build())
    }
}

#[derive(Parser)]
#[group(required = true, multiple = false)]
pub struct PasswordArgs {
    /// MD5-hashed OpenSprinkler password.
    #[clap(long = "password", env = "OPENSPRINKLER_PASSWORD")]
    hash: Option<String>,

    /// Plain-text OpenSprinkler password, hashed before sending.
    #[clap(long = "plain-password", env = "OPENSPRINKLER_PLAIN_PASSWORD")]
    plain: Option<String>,
}

impl PasswordArgs {
    /// The digest the controller expects.
    pub fn hash(&self) -> Result<String> {
        match (&self.hash, &self.plain) {
            (Some(hash), _) => Ok(hash.clone()),
            (None, Some(plain)) => Ok(hash_password(plain)),
            (None, None) => bail!("either the hashed or the plain-text password is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_is_passed_through() -> Result {
        let args = ControllerArgs::try_parse_from([
            "h2no",
            "--host",
            "http://10.0.0.1:8080",
            "--password",
            "a6d82bced638de3def1e9bbb4983225c",
        ])
        .unwrap();
        assert_eq!(args.password.hash()?, "a6d82bced638de3def1e9bbb4983225c");
        assert_eq!(args.timeout, Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn plain_password_is_hashed() -> Result {
        let args = ControllerArgs::try_parse_from([
            "h2no",
            "--host",
            "http://10.0.0.1:8080",
            "--plain-password",
            "opendoor",
            "--timeout",
            "1m",
        ])
        .unwrap();
        assert_eq!(args.password.hash()?, "a6d82bced638de3def1e9bbb4983225c");
        assert_eq!(args.timeout, Duration::from_secs(60));
        Ok(())
    }

    #[test]
    fn both_passwords_conflict() {
        let result = ControllerArgs::try_parse_from([
            "h2no",
            "--host",
            "http://10.0.0.1:8080",
            "--password",
            "a6d82bced638de3def1e9bbb4983225c",
            "--plain-password",
            "opendoor",
        ]);
        assert!(result.is_err());
    }
}
