use std::sync::Arc;

use aws_config::SdkConfig;

use crate::{config::Config, service};

/// Everything an invocation needs, built once per cold start and shared across invocations
#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,
    pub dynamodb_client: Arc<service::dynamodb::DynamoDb>,
    pub sns_client: Arc<service::sns::Sns>,
    pub config: Arc<Config>,
}

impl Context {
    pub fn new(sdk_config: &SdkConfig, config: Config) -> Self {
        let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(sdk_config));
        let dynamodb_client = service::dynamodb::DynamoDb::new(
            aws_sdk_dynamodb::Client::new(sdk_config),
            &config.table_name,
        );
        let sns_client =
            service::sns::Sns::new(aws_sdk_sns::Client::new(sdk_config), &config.sns_topic_arn);

        Self {
            s3_client: Arc::new(s3_client),
            dynamodb_client: Arc::new(dynamodb_client),
            sns_client: Arc::new(sns_client),
            config: Arc::new(config),
        }
    }
}
