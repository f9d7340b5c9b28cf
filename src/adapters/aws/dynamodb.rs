use crate::domain::task::Task;
use crate::ports::repository::TaskRepository;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use std::error::Error;

/// DynamoAdapter implements TaskRepository for AWS DynamoDB.
#[derive(Clone)]
pub struct DynamoAdapter {
    client: Client,
    table_name: String,
}

impl DynamoAdapter {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl TaskRepository for DynamoAdapter {
    async fn put_task(&self, task: &Task) -> Result<(), Box<dyn Error + Send + Sync>> {
        let image_url = match &task.image_url {
            Some(url) => AttributeValue::S(url.clone()),
            None => AttributeValue::Null(true),
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(task.id.clone()))
            .item("title", AttributeValue::S(task.title.clone()))
            .item("description", AttributeValue::S(task.description.clone()))
            .item("imageUrl", image_url)
            .item("location", AttributeValue::S(task.location.clone()))
            .item("createdAt", AttributeValue::N(task.created_at.to_string()))
            .item("updatedAt", AttributeValue::N(task.updated_at.to_string()))
            .send()
            .await?;
        Ok(())
    }

    async fn scan_tasks(&self) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        let resp = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await?;

        let tasks = resp
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| task_from_item(&item))
            .collect();
        Ok(tasks)
    }
}

// Missing or malformed attributes degrade to field defaults rather than
// failing the whole scan.
fn task_from_item(item: &HashMap<String, AttributeValue>) -> Task {
    Task {
        id: string_attr(item, "id"),
        title: string_attr(item, "title"),
        description: string_attr(item, "description"),
        image_url: item.get("imageUrl").and_then(|v| v.as_s().ok()).cloned(),
        location: string_attr(item, "location"),
        created_at: number_attr(item, "createdAt"),
        updated_at: number_attr(item, "updatedAt"),
    }
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> String {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .unwrap_or_default()
}

fn number_attr(item: &HashMap<String, AttributeValue>, name: &str) -> i64 {
    item.get(name)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}
