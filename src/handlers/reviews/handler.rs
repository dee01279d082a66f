//! Review handler implementations

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
    services::ReviewService,
    state::AppState,
};

use super::{
    request::{CreateReviewRequest, ListReviewsQuery, UpdateReviewRequest},
    response::{ReviewResponse, ReviewsListResponse},
};

/// List a title's reviews (open to anyone, paginated)
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
    Query(query): Query<ListReviewsQuery>,
) -> AppResult<Json<ReviewsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (reviews, total) =
        ReviewService::list_reviews(state.db(), &title_id, page, per_page).await?;

    Ok(Json(ReviewsListResponse {
        reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// Create a review (authenticated; one per author per title)
pub async fn create_review(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(title_id): Path<Uuid>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    payload.validate()?;

    let review = ReviewService::create_review(
        state.db(),
        &title_id,
        &auth_user,
        &payload.text,
        payload.score,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Get a review
pub async fn get_review(
    State(state): State<AppState>,
    Path((title_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ReviewResponse>> {
    let review = ReviewService::get_review(state.db(), &title_id, &id).await?;
    Ok(Json(review.into()))
}

/// Update a review (author, moderator or admin)
pub async fn update_review(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((title_id, id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    payload.validate()?;

    let review = ReviewService::update_review(
        state.db(),
        &title_id,
        &id,
        &auth_user,
        payload.text.as_deref(),
        payload.score,
    )
    .await?;

    Ok(Json(review.into()))
}

/// Delete a review (author, moderator or admin)
pub async fn delete_review(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((title_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    ReviewService::delete_review(state.db(), &title_id, &id, &auth_user).await?;
    Ok(StatusCode::NO_CONTENT)
}
