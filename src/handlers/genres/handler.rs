//! Genre handler implementations

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
    services::GenreService,
    state::AppState,
};

use super::{
    request::{CreateGenreRequest, ListGenresQuery},
    response::{GenreResponse, GenresListResponse},
};

/// List genres (open to anyone, paginated)
pub async fn list_genres(
    State(state): State<AppState>,
    Query(query): Query<ListGenresQuery>,
) -> AppResult<Json<GenresListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (genres, total) =
        GenreService::list_genres(state.db(), page, per_page, query.search.as_deref()).await?;

    Ok(Json(GenresListResponse {
        genres: genres.into_iter().map(GenreResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Create a genre (admin)
pub async fn create_genre(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateGenreRequest>,
) -> AppResult<(StatusCode, Json<GenreResponse>)> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    payload.validate()?;

    let genre = GenreService::create_genre(state.db(), &payload.name, &payload.slug).await?;

    Ok((StatusCode::CREATED, Json(genre.into())))
}

/// Delete a genre by slug (admin)
pub async fn delete_genre(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    GenreService::delete_genre(state.db(), &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
