use async_trait::async_trait;
use serde_json::Value;

use super::config::DownstreamTarget;
use super::envelope::Envelope;
use super::errors::{ConfigurationError, HandlerError};

/// Raw result of a synchronous function invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvokeOutput {
    pub payload: Vec<u8>,
    /// Set when the downstream function itself raised.
    pub function_error: Option<String>,
}

/// Raw result of an HTTP call, before the body is decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl EndpointResponse {
    /// Anything below 400 counts as success, redirects included.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Invokes another compute function by name.
#[async_trait]
pub trait FunctionClient: Send + Sync {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>)
        -> Result<InvokeOutput, HandlerError>;
}

/// Issues a single GET against an HTTP endpoint.
#[async_trait]
pub trait EndpointClient: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<EndpointResponse, HandlerError>;
}

pub struct FunctionInvoker<C> {
    client: C,
    function_name: String,
}

impl<C: FunctionClient> FunctionInvoker<C> {
    pub fn new(client: C, target: DownstreamTarget) -> Result<Self, ConfigurationError> {
        match target {
            DownstreamTarget::Function { name } => Ok(Self {
                client,
                function_name: name,
            }),
            other => Err(wrong_kind(&other, "function")),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Forwards `request` to the downstream function and returns its output
    /// as-is, without wrapping it in an envelope.
    pub async fn invoke_function(&self, request: &Value) -> Result<Value, HandlerError> {
        let payload = serde_json::to_vec(request)
            .map_err(|e| HandlerError::Invocation(format!("{:?}", e)))?;
        tracing::info!(request = %String::from_utf8_lossy(&payload), "request");

        let output = self.client.invoke(&self.function_name, payload).await?;
        let body = String::from_utf8_lossy(&output.payload);
        if let Some(function_error) = &output.function_error {
            tracing::warn!(
                function = %self.function_name,
                function_error = %function_error,
                "Downstream function reported an error"
            );
        }
        tracing::info!(response = %body, "downstream response");

        serde_json::from_slice(&output.payload)
            .map_err(|e| HandlerError::Invocation(format!("{:?}", e)))
    }
}

pub struct EndpointInvoker<C> {
    client: C,
    url: String,
}

impl<C: EndpointClient> EndpointInvoker<C> {
    pub fn new(client: C, target: DownstreamTarget) -> Result<Self, ConfigurationError> {
        match target {
            DownstreamTarget::Endpoint { url } => Ok(Self { client, url }),
            other => Err(wrong_kind(&other, "endpoint")),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Calls the endpoint and relays its JSON body and status code through an
    /// envelope. Error statuses are relayed too; a non-JSON body is an error.
    pub async fn invoke_endpoint(&self, request: &Value) -> Result<Envelope, HandlerError> {
        tracing::info!(url = %self.url, request = %request, "Calling endpoint");

        let response = self.client.fetch(&self.url).await?;
        if response.is_success() {
            tracing::info!(status = response.status, "Endpoint call succeeded");
        } else {
            tracing::warn!(status = response.status, "Endpoint call failed");
        }
        tracing::info!(body = %String::from_utf8_lossy(&response.body), "Endpoint response");

        let body: Value = serde_json::from_slice(&response.body)?;
        Ok(Envelope::with_status(&body, response.status))
    }
}

fn wrong_kind(target: &DownstreamTarget, expected: &str) -> ConfigurationError {
    ConfigurationError::Invalid {
        name: "downstream target".to_string(),
        reason: format!("expected a {} target, got {}", expected, target),
    }
}
