use serde::{Deserialize, Serialize};

/// A shopping task as persisted in the document store and returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Public locator of the uploaded image, `None` when no image was supplied.
    pub image_url: Option<String>,
    pub location: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds, stamped at write time
    pub updated_at: i64,
}

/// Input for creating a task, with the embedded image already decoded.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<Vec<u8>>,
    pub location: String,
    pub created_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_camel_case_with_null_image() {
        let task = Task {
            id: "t1".to_string(),
            title: "Milk".to_string(),
            description: "2%".to_string(),
            image_url: None,
            location: "store".to_string(),
            created_at: 1,
            updated_at: 2,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["imageUrl"], serde_json::Value::Null);
        assert_eq!(json["createdAt"], 1);
        assert_eq!(json["updatedAt"], 2);
        assert_eq!(json["location"], "store");
    }
}
