//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Standard single-item envelope: `{ success, data, message, errors, ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Whether the API reports the call as successful.
    #[serde(default)]
    pub success: bool,
    /// Payload; absent or null on failure.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Validation or processing errors.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Server timestamp (ISO-8601).
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Correlation id for server-side log lookup.
    #[serde(default)]
    pub correlation_id: Option<String>,
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Whether the API reports the call as successful.
    #[serde(default)]
    pub success: bool,
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// One-based page number.
    #[serde(default)]
    pub page: u32,
    /// Page size requested.
    #[serde(default)]
    pub page_size: u32,
    /// Items across all pages.
    #[serde(default)]
    pub total_items: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// A later page exists.
    #[serde(default)]
    pub has_next_page: bool,
    /// An earlier page exists.
    #[serde(default)]
    pub has_previous_page: bool,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Server timestamp (ISO-8601).
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(json!({
            "success": true,
            "data": {"orderId": "o-1"},
            "correlationId": "c-9"
        }))
        .unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap()["orderId"], "o-1");
        assert!(envelope.errors.is_empty());
        assert_eq!(envelope.correlation_id.as_deref(), Some("c-9"));
    }

    #[test]
    fn test_envelope_failure_without_data() {
        let envelope: ApiEnvelope<String> = serde_json::from_value(json!({
            "success": false,
            "data": null,
            "message": "Order not found",
            "errors": ["ORDER_NOT_FOUND"]
        }))
        .unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors, vec!["ORDER_NOT_FOUND".to_owned()]);
    }

    #[test]
    fn test_paginated_response() {
        let page: PaginatedResponse<String> = serde_json::from_value(json!({
            "success": true,
            "items": ["a", "b"],
            "page": 1,
            "pageSize": 2,
            "totalItems": 5,
            "totalPages": 3,
            "hasNextPage": true,
            "hasPreviousPage": false
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }
}
