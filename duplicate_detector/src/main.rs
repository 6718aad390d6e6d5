mod config;
mod context;
mod digest;
mod error;
mod handler;
mod model;
mod service;

use anyhow::Context as _;
use aws_lambda_events::event::s3::S3Event;
use config::Config;
use handler::handler;
use lambda_entrypoint::LambdaEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    LambdaEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::info!(
        environment=%config.environment,
        table_name=%config.table_name,
        sns_topic_arn=%config.sns_topic_arn,
        "initialized config"
    );

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let ctx = context::Context::new(&sdk_config, config);

    tracing::trace!("initialized clients");

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();

        async move { handler(ctx, event).await }
    });

    run(func).await
}
