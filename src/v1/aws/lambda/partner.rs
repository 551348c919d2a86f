use anyhow::{anyhow, Context};
use apifuncs::v1::{
    config::{self, ServiceConfig},
    envelope::Envelope,
    handlers, logging,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = config::load_dotenv();
    let service = ServiceConfig::from_env().context("Could not load partner configuration")?;
    logging::init(&service.log_level);
    logging::env_file_loaded(env_file.as_deref());
    tracing::info!(service = %service.service_name, "Loading function");

    lambda_runtime::run(service_fn(handler))
        .await
        .map_err(|e| anyhow!(e))
}

async fn handler(event: LambdaEvent<Value>) -> Result<Envelope, Error> {
    Ok(handlers::partner(&event.payload))
}
