use anyhow::{anyhow, Context};
use apifuncs::v1::{
    config::{self, DownstreamTarget},
    envelope::Envelope,
    invoker::EndpointInvoker,
    logging,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = config::load_dotenv();
    logging::init_from_env();
    logging::env_file_loaded(env_file.as_deref());
    let target = DownstreamTarget::endpoint_from_env()
        .context("The endpoint proxy needs a downstream endpoint")?;
    let invoker = EndpointInvoker::new(reqwest::Client::new(), target)?;
    tracing::info!(url = invoker.url(), "Endpoint proxy ready");

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(&invoker, event)
    }))
    .await
    .map_err(|e| anyhow!(e))
}

async fn handler(
    invoker: &EndpointInvoker<reqwest::Client>,
    event: LambdaEvent<Value>,
) -> Result<Envelope, Error> {
    Ok(invoker.invoke_endpoint(&event.payload).await?)
}
