//! Environment configuration for the gateway process.

use std::env;

/// S3 bucket holding uploaded images. Fixed, not configurable.
pub const BUCKET_NAME: &str = "shopping-images";

/// DynamoDB table holding task records. Fixed, not configurable.
pub const TABLE_NAME: &str = "ShoppingTasks";

/// Process-wide configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Endpoint URL for the backing services (local emulator by default)
    pub endpoint: String,
    /// AWS region
    pub region: String,
    /// AWS Access Key ID
    pub access_key_id: String,
    /// AWS Secret Access Key
    pub secret_access_key: String,
    /// Base URL for locators returned to clients. Distinct from `endpoint`:
    /// clients may reach the backing services via a different address than
    /// this process does (the default is how an Android emulator reaches the
    /// host machine).
    pub public_base_url: String,
    /// SQS queue URL for task-created events
    pub queue_url: String,
    /// SNS topic ARN for task-created notifications
    pub topic_arn: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            addr: env::var("ADDR").unwrap_or_else(|_| String::from("0.0.0.0")),
            port: env::var("PORT").unwrap_or_else(|_| String::from("3000")),
            endpoint: env::var("AWS_ENDPOINT")
                .unwrap_or_else(|_| String::from("http://localhost:4566")),
            region: env::var("AWS_REGION").unwrap_or_else(|_| String::from("us-east-1")),
            access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| String::from("test")),
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY")
                .unwrap_or_else(|_| String::from("test")),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| String::from("http://10.0.2.2:4566")),
            queue_url: env::var("SQS_QUEUE_URL").unwrap_or_else(|_| {
                String::from("http://localhost:4566/000000000000/shopping-tasks-queue")
            }),
            topic_arn: env::var("SNS_TOPIC_ARN").unwrap_or_else(|_| {
                String::from("arn:aws:sns:us-east-1:000000000000:shopping-notifications")
            }),
        }
    }
}
