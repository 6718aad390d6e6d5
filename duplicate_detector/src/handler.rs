use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    context::Context,
    digest::sha256_hex,
    error::{DetectorError, ServiceFailure},
    model::{DuplicateNotice, HashRecord, Response, StoredDigest, UploadEvent},
};

/// Processes the s3 event
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<Response, Error> {
    tracing::info!(
        "processing s3 records record_count={}",
        event.payload.records.len()
    );

    let upload = UploadEvent::try_from(&event.payload)?;

    Ok(detect_duplicate(&ctx, &upload).await)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Duplicate,
    New,
}

impl From<Outcome> for Response {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Duplicate => Response::duplicate(),
            Outcome::New => Response::new_file(),
        }
    }
}

/// Runs the whole pipeline for one object. Every failure is turned into a response here.
#[tracing::instrument(
    skip(ctx, upload),
    fields(bucket=%upload.bucket, key=%upload.key, table_name=%ctx.config.table_name)
)]
pub async fn detect_duplicate(ctx: &Context, upload: &UploadEvent) -> Response {
    match process(ctx, upload).await {
        Ok(outcome) => {
            tracing::info!(outcome=?outcome, "processed upload");
            outcome.into()
        }
        Err(failure) => {
            tracing::error!(error=?failure, code=?failure.code(), "failed to process upload");
            let err = DetectorError::from_failure(failure, upload);
            err.into()
        }
    }
}

/// Fetch, hash, then either report or record.
/// The lookup and the put are separate calls, so two concurrent uploads of the same content
/// can both be recorded as new.
async fn process(ctx: &Context, upload: &UploadEvent) -> Result<Outcome, ServiceFailure> {
    let content = ctx
        .s3_client
        .get_object_bytes(&upload.bucket, &upload.key)
        .await?;

    let digest = sha256_hex(&content);
    tracing::trace!(digest=%digest, size=content.len(), "hashed object");

    match ctx.dynamodb_client.get_hash_record(&digest).await? {
        StoredDigest::Seen { original } => {
            let message = DuplicateNotice {
                key: &upload.key,
                digest: &digest,
                original: original.as_ref(),
            }
            .to_string();

            let message_id = ctx.sns_client.publish(&message).await?;
            tracing::info!(
                message_id=?message_id,
                original=?original.as_ref().map(|record| &record.file_name),
                "reported duplicate"
            );

            Ok(Outcome::Duplicate)
        }
        StoredDigest::Unseen => {
            ctx.dynamodb_client
                .put_hash_record(HashRecord {
                    hash_key: digest,
                    file_name: upload.key.clone(),
                })
                .await?;

            Ok(Outcome::New)
        }
    }
}
