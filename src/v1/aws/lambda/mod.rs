use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use aws_sdk_lambda::Client;

use crate::v1::errors::HandlerError;
use crate::v1::invoker::{FunctionClient, InvokeOutput};

pub fn client(config: &SdkConfig) -> Client {
    Client::new(config)
}

#[async_trait]
impl FunctionClient for Client {
    async fn invoke(
        &self,
        function_name: &str,
        payload: Vec<u8>,
    ) -> Result<InvokeOutput, HandlerError> {
        let output = Client::invoke(self)
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| HandlerError::Invocation(format!("{:?}", e.into_source())))?;
        Ok(InvokeOutput {
            payload: output.payload.map(Blob::into_inner).unwrap_or_default(),
            function_error: output.function_error,
        })
    }
}
