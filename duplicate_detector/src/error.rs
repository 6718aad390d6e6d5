//! Failure types for a single invocation.
//!
//! Service clients report a [ServiceFailure], which only knows what the remote service said.
//! The handler turns it into a [DetectorError] once it knows which object it was working on,
//! and every [DetectorError] maps to exactly one status code.

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

use crate::model::UploadEvent;

/// An error raised by one of the service clients
#[derive(Debug, Error)]
pub enum ServiceFailure {
    /// The service processed the request and answered with an error code
    #[error("{message}")]
    Service { code: String, message: String },
    /// Anything else: dispatch, timeouts, reading the response, (de)serialization
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ServiceFailure {
    /// Splits an sdk error into a coded service error or an unexpected failure
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        if let SdkError::ServiceError(service_err) = &err
            && let Some(code) = service_err.err().code()
        {
            let message = service_err.err().message().unwrap_or(code).to_string();
            return ServiceFailure::Service {
                code: code.to_string(),
                message,
            };
        }

        ServiceFailure::Unexpected(anyhow::Error::new(err))
    }

    /// The service error code, if the service answered at all
    pub fn code(&self) -> Option<&str> {
        match self {
            ServiceFailure::Service { code, .. } => Some(code.as_str()),
            ServiceFailure::Unexpected(_) => None,
        }
    }
}

/// Every way processing an upload can fail, as reported back to the invoker
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectorError {
    #[error("Bucket '{bucket}' does not exist.")]
    BucketNotFound { bucket: String },
    #[error("Object '{key}' does not exist in bucket '{bucket}'.")]
    ObjectNotFound { bucket: String, key: String },
    #[error("Access denied. Check your permissions.")]
    AccessDenied,
    #[error("Error processing the file: {0}")]
    Service(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DetectorError {
    /// Translates a client failure raised while processing `upload`
    pub fn from_failure(failure: ServiceFailure, upload: &UploadEvent) -> Self {
        match failure {
            ServiceFailure::Service { code, message } => match code.as_str() {
                "NoSuchBucket" => DetectorError::BucketNotFound {
                    bucket: upload.bucket.clone(),
                },
                "NoSuchKey" => DetectorError::ObjectNotFound {
                    bucket: upload.bucket.clone(),
                    key: upload.key.clone(),
                },
                // s3, dynamodb and sns each spell it differently
                "AccessDenied" | "AccessDeniedException" | "AuthorizationError" => {
                    DetectorError::AccessDenied
                }
                _ => DetectorError::Service(message),
            },
            ServiceFailure::Unexpected(err) => DetectorError::Unexpected(format!("{err:#}")),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            DetectorError::BucketNotFound { .. } | DetectorError::ObjectNotFound { .. } => 404,
            DetectorError::AccessDenied => 403,
            DetectorError::Service(_) | DetectorError::Unexpected(_) => 500,
        }
    }
}
