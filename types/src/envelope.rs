use serde::Deserialize;

/// Envelope every backend endpoint wraps its JSON payload in.
///
/// `success: false` responses carry a human-readable `message` instead of
/// `data`; list endpoints additionally populate `pagination`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub page_size: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One page of a collection. Resource stores replace their cached page
/// wholesale with a value of this type on every successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_decodes() {
        let env: ApiEnvelope<Vec<i64>> = serde_json::from_str(
            r#"{
                "success": true,
                "data": [1, 2, 3],
                "pagination": {
                    "currentPage": 2,
                    "totalPages": 5,
                    "totalCount": 42,
                    "pageSize": 10,
                    "hasNextPage": true,
                    "hasPrevPage": true
                }
            }"#,
        )
        .unwrap();

        assert!(env.success);
        assert_eq!(env.data.unwrap(), vec![1, 2, 3]);
        let page = env.pagination.unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.page_size, 10);
        assert!(page.has_prev_page);
    }

    #[test]
    fn failure_envelope_keeps_server_message() {
        let env: ApiEnvelope<Vec<i64>> = serde_json::from_str(
            r#"{"success": false, "message": "Company not found"}"#,
        )
        .unwrap();

        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Company not found"));
    }
}
