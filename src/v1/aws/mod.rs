pub mod lambda;

use aws_config::{BehaviorVersion, SdkConfig};

/// Loads the shared SDK configuration from the Lambda execution environment.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest()).load().await
}
