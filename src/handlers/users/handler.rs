//! User handler implementations

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
    services::UserService,
    state::AppState,
};

use super::{
    request::{CreateUserRequest, ListUsersQuery, UpdateMeRequest, UpdateUserRequest},
    response::{UserResponse, UsersListResponse},
};

/// Verify the caller is an admin or superuser
fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// List all users (admin, paginated)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    require_admin(&auth_user)?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (users, total) =
        UserService::list_users(state.db(), page, per_page, query.search.as_deref()).await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Create a user (admin)
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let user = UserService::create_user(
        state.db(),
        &payload.username,
        &payload.email,
        payload.first_name.as_deref().unwrap_or(""),
        payload.last_name.as_deref().unwrap_or(""),
        payload.bio.as_deref().unwrap_or(""),
        payload.role.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Get a user by username (admin)
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&auth_user)?;

    let user = UserService::get_by_username(state.db(), &username).await?;
    Ok(Json(user.into()))
}

/// Update a user by username (admin)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(username): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &username,
        payload.email.as_deref(),
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
        payload.bio.as_deref(),
        payload.role.as_deref(),
    )
    .await?;

    Ok(Json(user.into()))
}

/// Delete a user by username (admin)
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(username): Path<String>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    UserService::delete_user(state.db(), &username).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the authenticated user's own record
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_by_username(state.db(), &auth_user.username).await?;
    Ok(Json(user.into()))
}

/// Update the authenticated user's own record. The role field, if sent,
/// is ignored: self-service updates never change the caller's role.
pub async fn update_me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateMeRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::update_self(
        state.db(),
        &auth_user.username,
        payload.email.as_deref(),
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
        payload.bio.as_deref(),
    )
    .await?;

    Ok(Json(user.into()))
}
