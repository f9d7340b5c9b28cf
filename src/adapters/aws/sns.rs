use crate::domain::events::TaskNotification;
use crate::ports::notifier::Notifier;
use async_trait::async_trait;
use aws_sdk_sns::Client;
use std::error::Error;

/// SnsAdapter implements Notifier for AWS SNS.
#[derive(Clone)]
pub struct SnsAdapter {
    client: Client,
    topic_arn: String,
}

impl SnsAdapter {
    pub fn new(client: Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Notifier for SnsAdapter {
    async fn publish(
        &self,
        notification: TaskNotification,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let message = serde_json::to_string(&notification)?;
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .subject(TaskNotification::CREATED_SUBJECT)
            .send()
            .await?;
        Ok(())
    }
}
