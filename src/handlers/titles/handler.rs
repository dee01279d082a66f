//! Title handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::TitleService,
    state::AppState,
};

use super::{
    request::{CreateTitleRequest, ListTitlesQuery, UpdateTitleRequest},
    response::{TitleResponse, TitlesListResponse},
};

/// List titles (open to anyone; filterable by category, genre, name, year)
pub async fn list_titles(
    State(state): State<AppState>,
    Query(query): Query<ListTitlesQuery>,
) -> AppResult<Json<TitlesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (titles, total) = TitleService::list_titles(
        state.db(),
        page,
        per_page,
        query.category.as_deref(),
        query.genre.as_deref(),
        query.name.as_deref(),
        query.year,
    )
    .await?;

    Ok(Json(TitlesListResponse {
        titles,
        total,
        page,
        per_page,
    }))
}

/// Create a title (admin)
pub async fn create_title(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateTitleRequest>,
) -> AppResult<(StatusCode, Json<TitleResponse>)> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    payload.validate()?;

    let title = TitleService::create_title(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(title)))
}

/// Get a title with its computed rating
pub async fn get_title(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TitleResponse>> {
    let title = TitleService::get_title(state.db(), &id).await?;
    Ok(Json(title))
}

/// Update a title (admin, partial)
pub async fn update_title(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTitleRequest>,
) -> AppResult<Json<TitleResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    payload.validate()?;

    let title = TitleService::update_title(state.db(), &id, payload).await?;
    Ok(Json(title))
}

/// Delete a title (admin)
pub async fn delete_title(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    TitleService::delete_title(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
