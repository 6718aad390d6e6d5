use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Where the lambda is deployed, read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production
    Production,
    /// Dev and staging
    Develop,
    /// A developer machine
    Local,
}

impl Environment {
    /// Reads `ENVIRONMENT`; a missing or unrecognized value means production
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("ENVIRONMENT").ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::parse) {
            Some(Ok(env)) => env,
            Some(Err(e)) => {
                tracing::warn!(error=%e, "falling back to production");
                Environment::Production
            }
            None => Environment::Production,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "prod",
            Environment::Develop => "dev",
            Environment::Local => "local",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value of `ENVIRONMENT` that names no [Environment]
#[derive(Debug, Error)]
#[error("unrecognized environment '{0}'")]
pub struct UnknownEnvironment(String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(value: &str) -> Result<Self, UnknownEnvironment> {
        [
            Environment::Production,
            Environment::Develop,
            Environment::Local,
        ]
        .into_iter()
        .find(|env| env.as_str() == value)
        .ok_or_else(|| UnknownEnvironment(value.to_string()))
    }
}
