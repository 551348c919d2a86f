use anyhow::{anyhow, Context};
use apifuncs::v1::{
    aws,
    config::{self, DownstreamTarget},
    invoker::FunctionInvoker,
    logging,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = config::load_dotenv();
    logging::init_from_env();
    logging::env_file_loaded(env_file.as_deref());
    let target = DownstreamTarget::function_from_env()
        .context("The proxy needs a downstream function")?;
    let client = aws::lambda::client(&aws::load_sdk_config().await);
    let invoker = FunctionInvoker::new(client, target)?;
    tracing::info!(function = invoker.function_name(), "Proxy ready");

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(&invoker, event)
    }))
    .await
    .map_err(|e| anyhow!(e))
}

async fn handler(
    invoker: &FunctionInvoker<aws_sdk_lambda::Client>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(invoker.invoke_function(&event.payload).await?)
}
