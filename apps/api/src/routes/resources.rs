use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::{filter_resources, LearningResource, ResourceKind};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    pub search: Option<String>,
    /// `all` or a resource kind (course, article, video, tool).
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub total: usize,
    pub resources: Vec<LearningResource>,
}

/// GET /api/v1/resources
pub async fn handle_list_resources(
    Query(query): Query<ResourceQuery>,
) -> Result<Json<ResourceListResponse>, AppError> {
    let kind = match query.kind.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(k) if k.eq_ignore_ascii_case("all") => None,
        Some(k) => Some(ResourceKind::parse(k).ok_or_else(|| {
            AppError::Validation(format!(
                "type must be one of all, course, article, video, tool (got '{k}')"
            ))
        })?),
    };

    let resources = filter_resources(query.search.as_deref(), kind);
    Ok(Json(ResourceListResponse {
        total: resources.len(),
        resources,
    }))
}
