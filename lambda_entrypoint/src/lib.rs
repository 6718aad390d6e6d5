#![deny(missing_docs)]
//! Standardized process initialization for lambda binaries in this workspace.
//! Every `main` should call [LambdaEntrypoint::init] before doing anything else so that
//! log output has the same shape across functions.

mod environment;

pub use environment::{Environment, UnknownEnvironment};

use tracing_subscriber::EnvFilter;

/// Describes how the process-wide tracing subscriber gets installed
#[derive(Debug)]
pub struct LambdaEntrypoint {
    env: Environment,
}

impl Default for LambdaEntrypoint {
    fn default() -> Self {
        LambdaEntrypoint {
            env: Environment::from_env(),
        }
    }
}

/// sentinel struct which proves that [LambdaEntrypoint::init] was called
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl LambdaEntrypoint {
    /// consume self, install the global subscriber and return proof of initialization
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
