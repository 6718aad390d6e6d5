mod get_object_bytes;

use aws_sdk_s3 as s3;
#[allow(unused_imports)]
use mockall::automock;

use crate::error::ServiceFailure;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Reads the whole object into memory
    #[tracing::instrument(skip(self))]
    pub async fn get_object_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ServiceFailure> {
        get_object_bytes::get_object_bytes(&self.inner, bucket, key).await
    }
}
