//! JSON envelopes returned by the catalog API endpoints.

use serde::Serialize;

use crate::pagination::Paginated;

/// Pagination block of a listing response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

impl<T> From<&Paginated<T>> for PaginationMeta {
    fn from(page: &Paginated<T>) -> Self {
        Self {
            page: page.page,
            page_size: page.per_page,
            total_count: page.total_count,
            total_pages: page.total_pages,
            has_more: page.has_more,
        }
    }
}

/// Successful response: `{"success": true, "data": ..., "pagination": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            pagination: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn paginated(page: Paginated<T>) -> Self {
        let pagination = PaginationMeta::from(&page);
        Self {
            success: true,
            data: page.items,
            pagination: Some(pagination),
        }
    }
}

/// Failed response: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
