use aws_config::{BehaviorVersion, Region};
use axum::extract::DefaultBodyLimit;
use feira::adapters::aws::dynamodb::DynamoAdapter;
use feira::adapters::aws::s3::S3Adapter;
use feira::adapters::aws::sns::SnsAdapter;
use feira::adapters::aws::sqs::SqsAdapter;
use feira::adapters::http;
use feira::config::{AppConfig, BUCKET_NAME, TABLE_NAME};
use feira::GatewayService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// Inline uploads embed whole images in JSON bodies, so the default 2mb
// request limit is far too small.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    tracing_subscriber::fmt::init();

    // One shared AWS config pointed at the configured endpoint with static
    // credentials; path-style addressing is required by local emulators.
    let credentials = aws_sdk_s3::config::Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        "environment",
    );
    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .endpoint_url(&config.endpoint)
        .credentials_provider(credentials)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .force_path_style(true)
        .build();

    let storage = S3Adapter::new(
        aws_sdk_s3::Client::from_conf(s3_config),
        BUCKET_NAME.to_string(),
    );
    let repo = DynamoAdapter::new(
        aws_sdk_dynamodb::Client::new(&shared_config),
        TABLE_NAME.to_string(),
    );
    let queue = SqsAdapter::new(
        aws_sdk_sqs::Client::new(&shared_config),
        config.queue_url.clone(),
    );
    let notifier = SnsAdapter::new(
        aws_sdk_sns::Client::new(&shared_config),
        config.topic_arn.clone(),
    );

    let gateway = Arc::new(GatewayService::new(
        storage,
        repo,
        queue,
        notifier,
        config.public_base_url.clone(),
        BUCKET_NAME.to_string(),
    ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = http::router(gateway)
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.addr, config.port))
        .await
        .expect("Failed to bind TCP listener");
    tracing::info!("Listening at {}:{}", config.addr, config.port);
    tracing::info!("Backing services at {}", config.endpoint);
    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
