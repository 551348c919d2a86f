pub mod aws;
pub mod config;
pub mod diagnostics;
pub mod envelope;
pub mod errors;
pub mod handlers;
pub mod http;
pub mod invoker;
pub mod logging;
pub mod request;
