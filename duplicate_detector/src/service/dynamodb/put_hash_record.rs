use anyhow::Context;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{Item, to_item};

use crate::{error::ServiceFailure, model::HashRecord};

#[tracing::instrument(skip(client))]
pub(in crate::service::dynamodb) async fn put_hash_record(
    client: &Client,
    table: &str,
    record: HashRecord,
) -> Result<(), ServiceFailure> {
    let item: Item = to_item(record).context("failed to convert hash record")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .map_err(ServiceFailure::from_sdk)?;

    Ok(())
}
