use async_trait::async_trait;

use super::errors::HandlerError;
use super::invoker::{EndpointClient, EndpointResponse};

#[async_trait]
impl EndpointClient for reqwest::Client {
    async fn fetch(&self, url: &str) -> Result<EndpointResponse, HandlerError> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| HandlerError::Invocation(format!("{:?}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HandlerError::Invocation(format!("{:?}", e)))?;
        Ok(EndpointResponse {
            status,
            body: body.to_vec(),
        })
    }
}
