//! Title service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{CategoryRepository, GenreRepository, TitleRepository},
    error::{AppError, AppResult},
    handlers::titles::{
        request::{CreateTitleRequest, UpdateTitleRequest},
        response::TitleResponse,
    },
    models::RatedTitle,
    utils::validation,
};

/// Title service for business logic
pub struct TitleService;

impl TitleService {
    /// Create a new title
    pub async fn create_title(pool: &PgPool, payload: CreateTitleRequest) -> AppResult<TitleResponse> {
        validation::validate_year(payload.year)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let category_id = Self::resolve_category(pool, &payload.category).await?;
        let genre_ids = Self::resolve_genres(pool, &payload.genre).await?;

        let title = TitleRepository::create(
            pool,
            &payload.name,
            payload.year,
            payload.description.as_deref(),
            &category_id,
            &genre_ids,
        )
        .await?;

        Self::to_title_response(pool, title).await
    }

    /// Get title by ID
    pub async fn get_title(pool: &PgPool, id: &Uuid) -> AppResult<TitleResponse> {
        let title = TitleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Title not found".to_string()))?;

        Self::to_title_response(pool, title).await
    }

    /// Update title
    pub async fn update_title(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateTitleRequest,
    ) -> AppResult<TitleResponse> {
        // 404 before validation, matching resource-first lookup order
        TitleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Title not found".to_string()))?;

        if let Some(year) = payload.year {
            validation::validate_year(year).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let category_id = match payload.category.as_deref() {
            Some(slug) => Some(Self::resolve_category(pool, slug).await?),
            None => None,
        };
        let genre_ids = match payload.genre.as_deref() {
            Some(slugs) => Some(Self::resolve_genres(pool, slugs).await?),
            None => None,
        };

        let updated = TitleRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.year,
            payload.description.as_deref(),
            category_id.as_ref(),
            genre_ids.as_deref(),
        )
        .await?;

        Self::to_title_response(pool, updated).await
    }

    /// Delete title
    pub async fn delete_title(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !TitleRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Title not found".to_string()));
        }
        Ok(())
    }

    /// List titles with filters
    pub async fn list_titles(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        category_slug: Option<&str>,
        genre_slug: Option<&str>,
        name: Option<&str>,
        year: Option<i32>,
    ) -> AppResult<(Vec<TitleResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (titles, total) = TitleRepository::list(
            pool,
            offset,
            limit,
            category_slug,
            genre_slug,
            name,
            year,
        )
        .await?;

        let responses = futures::future::try_join_all(
            titles.into_iter().map(|t| Self::to_title_response(pool, t)),
        )
        .await?;

        Ok((responses, total))
    }

    /// Resolve a category slug to its id; unknown slugs are a client error
    async fn resolve_category(pool: &PgPool, slug: &str) -> AppResult<Uuid> {
        let category = CategoryRepository::find_by_slug(pool, slug)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Unknown category slug: {}", slug)))?;

        Ok(category.id)
    }

    /// Resolve genre slugs to ids; the list must be non-empty
    async fn resolve_genres(pool: &PgPool, slugs: &[String]) -> AppResult<Vec<Uuid>> {
        if slugs.is_empty() {
            return Err(AppError::Validation(
                "A title needs at least one genre".to_string(),
            ));
        }

        let mut ids = Vec::with_capacity(slugs.len());
        for slug in slugs {
            let genre = GenreRepository::find_by_slug(pool, slug)
                .await?
                .ok_or_else(|| AppError::Validation(format!("Unknown genre slug: {}", slug)))?;
            ids.push(genre.id);
        }

        Ok(ids)
    }

    /// Build the read representation: nested category/genres plus rating
    async fn to_title_response(pool: &PgPool, title: RatedTitle) -> AppResult<TitleResponse> {
        let category = match title.category_id {
            Some(category_id) => {
                sqlx::query_as::<_, crate::models::Category>(
                    r#"SELECT * FROM categories WHERE id = $1"#,
                )
                .bind(category_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };

        let genres = GenreRepository::list_for_title(pool, &title.id).await?;

        Ok(TitleResponse::from_parts(title, category, genres))
    }
}
