//! Comment handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::CommentService,
    state::AppState,
};

use super::{
    request::{CreateCommentRequest, ListCommentsQuery, UpdateCommentRequest},
    response::{CommentResponse, CommentsListResponse},
};

/// List a review's comments (open to anyone, paginated)
pub async fn list_comments(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ListCommentsQuery>,
) -> AppResult<Json<CommentsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (comments, total) =
        CommentService::list_comments(state.db(), &title_id, &review_id, page, per_page).await?;

    Ok(Json(CommentsListResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Create a comment (authenticated)
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((title_id, review_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    payload.validate()?;

    let comment = CommentService::create_comment(
        state.db(),
        &title_id,
        &review_id,
        &auth_user,
        &payload.text,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// Get a comment
pub async fn get_comment(
    State(state): State<AppState>,
    Path((title_id, review_id, id)): Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<Json<CommentResponse>> {
    let comment = CommentService::get_comment(state.db(), &title_id, &review_id, &id).await?;
    Ok(Json(comment.into()))
}

/// Update a comment (author, moderator or admin)
pub async fn update_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((title_id, review_id, id)): Path<(Uuid, Uuid, Uuid)>,
    Json(payload): Json<UpdateCommentRequest>,
) -> AppResult<Json<CommentResponse>> {
    payload.validate()?;

    let comment = CommentService::update_comment(
        state.db(),
        &title_id,
        &review_id,
        &id,
        &auth_user,
        &payload.text,
    )
    .await?;

    Ok(Json(comment.into()))
}

/// Delete a comment (author, moderator or admin)
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((title_id, review_id, id)): Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    CommentService::delete_comment(state.db(), &title_id, &review_id, &id, &auth_user).await?;
    Ok(StatusCode::NO_CONTENT)
}
