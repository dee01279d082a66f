//! Category handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::CategoryService,
    state::AppState,
};

use super::{
    request::{CreateCategoryRequest, ListCategoriesQuery},
    response::{CategoriesListResponse, CategoryResponse},
};

/// List categories (open to anyone, paginated)
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListCategoriesQuery>,
) -> AppResult<Json<CategoriesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (categories, total) =
        CategoryService::list_categories(state.db(), page, per_page, query.search.as_deref())
            .await?;

    Ok(Json(CategoriesListResponse {
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Create a category (admin)
pub async fn create_category(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    payload.validate()?;

    let category =
        CategoryService::create_category(state.db(), &payload.name, &payload.slug).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Delete a category by slug (admin)
pub async fn delete_category(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    CategoryService::delete_category(state.db(), &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
