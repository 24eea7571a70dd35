use serde::Serialize;

/// Options for creating a merge request dependency.
///
/// Serialized as the JSON request body; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateMergeRequestDependencyOptions {
    /// Global ID (not IID) of the merge request that must be merged first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking_merge_request_id: Option<u64>,
}

impl CreateMergeRequestDependencyOptions {
    pub fn new(blocking_merge_request_id: u64) -> Self {
        Self {
            blocking_merge_request_id: Some(blocking_merge_request_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_blocking_id() {
        let options = CreateMergeRequestDependencyOptions::new(569);
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"blocking_merge_request_id": 569})
        );
    }

    #[test]
    fn test_unset_field_omitted() {
        let options = CreateMergeRequestDependencyOptions::default();
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({}));
    }
}
