//! Category response DTOs

use serde::Serialize;

use crate::models::Category;

/// Category representation in API payloads
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Category list response
#[derive(Debug, Serialize)]
pub struct CategoriesListResponse {
    pub categories: Vec<CategoryResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
