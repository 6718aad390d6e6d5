pub use lambda_entrypoint::Environment;
use thiserror::Error;

pub const TABLE_NAME_VAR: &str = "TABLE_NAME";
pub const SNS_TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// The configuration parameters for the lambda.
///
/// Read once when the process starts. A cold start without these values must fail rather
/// than serve events, so construction is the only place a [ConfigError] can come from.
#[derive(Debug, Clone)]
pub struct Config {
    /// The dynamodb table holding one record per distinct content hash
    pub table_name: String,

    /// The sns topic duplicate notifications are published to
    pub sns_topic_arn: String,

    /// The environment we are in
    pub environment: Environment,
}

/// A required variable could not be read at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var_name} must be provided: {err}")]
    Missing {
        var_name: &'static str,
        err: std::env::VarError,
    },
    #[error("{var_name} must not be empty")]
    Empty { var_name: &'static str },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(std::env::var)
    }

    /// Builds the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let read = |var_name: &'static str| -> Result<String, ConfigError> {
            let value = lookup(var_name).map_err(|err| ConfigError::Missing { var_name, err })?;
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { var_name });
            }
            Ok(value)
        };

        let table_name = read(TABLE_NAME_VAR)?;
        let sns_topic_arn = read(SNS_TOPIC_ARN_VAR)?;

        Ok(Config {
            table_name,
            sns_topic_arn,
            environment: Environment::from_env(),
        })
    }
}
