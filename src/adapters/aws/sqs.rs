use crate::domain::events::TaskEvent;
use crate::ports::queue::EventQueue;
use async_trait::async_trait;
use aws_sdk_sqs::Client;
use std::error::Error;

/// SqsAdapter implements EventQueue for AWS SQS.
#[derive(Clone)]
pub struct SqsAdapter {
    client: Client,
    queue_url: String,
}

impl SqsAdapter {
    pub fn new(client: Client, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

#[async_trait]
impl EventQueue for SqsAdapter {
    async fn send_event(&self, event: TaskEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        let message_body = serde_json::to_string(&event)?;
        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message_body)
            .send()
            .await?;
        Ok(())
    }
}
