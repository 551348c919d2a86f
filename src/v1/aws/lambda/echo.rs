use apifuncs::v1::{config, diagnostics::Diagnostics, envelope::Envelope, handlers, logging};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let env_file = config::load_dotenv();
    logging::init_from_env();
    logging::env_file_loaded(env_file.as_deref());
    let diagnostics = Diagnostics::default();
    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(&diagnostics, event)
    }))
    .await
}

async fn handler(diagnostics: &Diagnostics, event: LambdaEvent<Value>) -> Result<Envelope, Error> {
    Ok(handlers::echo(diagnostics, &event.payload))
}
