use std::collections::HashMap;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_dynamo::from_item;

use super::HASH_KEY;
use crate::{
    error::ServiceFailure,
    model::{HashRecord, StoredDigest},
};

#[tracing::instrument(skip(client))]
pub(in crate::service::dynamodb) async fn get_hash_record(
    client: &Client,
    table: &str,
    digest: &str,
) -> Result<StoredDigest, ServiceFailure> {
    let output = client
        .get_item()
        .table_name(table)
        .key(HASH_KEY, AttributeValue::S(digest.to_owned()))
        .send()
        .await
        .map_err(ServiceFailure::from_sdk)?;

    Ok(stored_digest(output.item))
}

/// Any item counts as seen, even one that does not decode as a [HashRecord]
fn stored_digest(item: Option<HashMap<String, AttributeValue>>) -> StoredDigest {
    let Some(item) = item else {
        return StoredDigest::Unseen;
    };

    let record: Result<HashRecord, _> = from_item(item);
    match record {
        Ok(record) => StoredDigest::Seen {
            original: Some(record),
        },
        Err(e) => {
            tracing::warn!(error=?e, "unable to deserialize hash record");
            StoredDigest::Seen { original: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    #[test]
    fn no_item_is_unseen() {
        assert_eq!(stored_digest(None), StoredDigest::Unseen);
    }

    #[test]
    fn full_item_carries_the_record() {
        let item = HashMap::from([
            ("HashKey".to_string(), s("abc")),
            ("FileName".to_string(), s("k1")),
        ]);

        assert_eq!(
            stored_digest(Some(item)),
            StoredDigest::Seen {
                original: Some(HashRecord {
                    hash_key: "abc".to_string(),
                    file_name: "k1".to_string(),
                }),
            }
        );
    }

    #[test]
    fn item_without_file_name_is_still_seen() {
        let item = HashMap::from([("HashKey".to_string(), s("abc"))]);

        assert_eq!(
            stored_digest(Some(item)),
            StoredDigest::Seen { original: None }
        );
    }
}
