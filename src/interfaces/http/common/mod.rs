//! Common API types shared by every module

pub mod validated_json;

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::DomainError;
use crate::listing::Page;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

/// Standard response wrapper.
///
/// Every REST endpoint returns data in this wrapper.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Query parameters understood by every list endpoint, documented once.
///
/// Handlers read the raw query map instead of this struct so that the
/// per-entity filter keys (declared next to each endpoint) flow through to
/// the listing engine; unknown keys are dropped there.
#[derive(Debug, Deserialize, IntoParams)]
#[allow(dead_code)]
pub struct ListParams {
    /// Page number, 1-based. Out-of-range values are clamped.
    pub page: Option<u64>,
    /// Page size; one of 10, 15, 20, 30, 50, 100
    #[serde(rename = "perPage")]
    pub per_page: Option<u64>,
    /// Sort key, one of the endpoint's declared sort options
    pub sort: Option<String>,
    /// Sort direction: ASC or DESC
    pub dir: Option<String>,
    /// Quick-search term matched across the endpoint's search columns
    pub search: Option<String>,
}

/// Paginated list response.
///
/// Carries the page slice plus the echoed filter/sort state so list controls
/// can re-render their current selection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items of the current page
    pub items: Vec<T>,
    /// Total number of items matching the active filters
    pub total_items: u64,
    /// Current page (1-based, clamped)
    pub current_page: u64,
    /// Page size
    pub per_page: u64,
    /// Total number of pages (at least 1)
    pub total_pages: u64,
    /// Active sort key ("" when the endpoint default applies)
    pub sort: String,
    /// Active sort direction
    pub dir: String,
    /// Echoed quick-search term
    pub search: String,
    /// Submitted value per declared filter key ("" when absent)
    pub filters: BTreeMap<String, String>,
}

impl<T> PaginatedResponse<T> {
    /// Map a listing [`Page`] of persistence models into DTO items
    pub fn from_page<M>(page: Page<M>, map: impl FnMut(M) -> T) -> Self {
        Self {
            items: page.items.into_iter().map(map).collect(),
            total_items: page.total_items,
            current_page: page.current_page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            sort: page.sort,
            dir: page.dir.as_str().to_string(),
            search: page.search,
            filters: page.filters,
        }
    }
}

/// Uniform status mapping for domain errors on every read and write path
pub fn domain_error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::InvalidOperation(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

/// 500 wrapper for raw store errors reaching a handler
pub fn db_error_response(e: sea_orm::DbErr) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
}
