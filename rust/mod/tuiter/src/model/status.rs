use serde::{Deserialize, Serialize};

/// Result of a delete-by-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStatus {
    pub deleted_count: u64,
}

/// Result of an update-by-id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of a count-by-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(DeleteStatus { deleted_count: 2 }).unwrap(),
            serde_json::json!({"deletedCount": 2})
        );
        assert_eq!(
            serde_json::to_value(UpdateStatus { matched_count: 1, modified_count: 0 }).unwrap(),
            serde_json::json!({"matchedCount": 1, "modifiedCount": 0})
        );
    }
}
