use anyhow::Context;
use aws_sdk_s3 as s3;

use crate::error::ServiceFailure;

#[tracing::instrument(skip(client))]
pub(in crate::service::s3) async fn get_object_bytes(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, ServiceFailure> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(ServiceFailure::from_sdk)?;

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect body")?;

    Ok(body.into_bytes().to_vec())
}
