use aws_sdk_sns as sns;
#[allow(unused_imports)]
use mockall::automock;

use crate::error::ServiceFailure;

#[cfg(test)]
pub use MockSnsClient as Sns;
#[cfg(not(test))]
pub use SnsClient as Sns;

#[derive(Clone, Debug)]
pub struct SnsClient {
    /// Inner SNS client
    inner: sns::Client,
    /// Topic every message is published to
    topic_arn: String,
}

#[cfg_attr(test, automock)]
impl SnsClient {
    pub fn new(inner: sns::Client, topic_arn: &str) -> Self {
        Self {
            inner,
            topic_arn: topic_arn.to_string(),
        }
    }

    /// Publishes a plain text message to the topic, returning the message id
    #[tracing::instrument(skip(self))]
    pub async fn publish(&self, message: &str) -> Result<Option<String>, ServiceFailure> {
        let output = self
            .inner
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .send()
            .await
            .map_err(ServiceFailure::from_sdk)?;

        Ok(output.message_id)
    }
}
