mod get_hash_record;
mod put_hash_record;

use aws_sdk_dynamodb as dynamodb;
#[allow(unused_imports)]
use mockall::automock;

use crate::{
    error::ServiceFailure,
    model::{HashRecord, StoredDigest},
};

#[cfg(test)]
pub use MockDynamoDbClient as DynamoDb;
#[cfg(not(test))]
pub use DynamoDbClient as DynamoDb;

/// The attribute the hash table is keyed on
pub(crate) const HASH_KEY: &str = "HashKey";

#[derive(Clone, Debug)]
pub struct DynamoDbClient {
    /// Inner DynamoDB client
    inner: dynamodb::Client,
    /// Table holding one [HashRecord] per digest
    table: String,
}

#[cfg_attr(test, automock)]
impl DynamoDbClient {
    pub fn new(inner: dynamodb::Client, table: &str) -> Self {
        Self {
            inner,
            table: table.to_string(),
        }
    }

    /// Point lookup of a digest
    #[tracing::instrument(skip(self))]
    pub async fn get_hash_record(&self, digest: &str) -> Result<StoredDigest, ServiceFailure> {
        get_hash_record::get_hash_record(&self.inner, &self.table, digest).await
    }

    /// Writes the record unconditionally, an existing record with the same key is replaced
    #[tracing::instrument(skip(self))]
    pub async fn put_hash_record(&self, record: HashRecord) -> Result<(), ServiceFailure> {
        put_hash_record::put_hash_record(&self.inner, &self.table, record).await
    }
}
