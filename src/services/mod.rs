//! Business logic services

pub mod auth_service;
pub mod category_service;
pub mod comment_service;
pub mod genre_service;
pub mod review_service;
pub mod title_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
pub use comment_service::CommentService;
pub use genre_service::GenreService;
pub use review_service::ReviewService;
pub use title_service::TitleService;
pub use user_service::UserService;
