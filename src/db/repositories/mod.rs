//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod category_repo;
pub mod comment_repo;
pub mod genre_repo;
pub mod review_repo;
pub mod title_repo;
pub mod user_repo;

pub use category_repo::CategoryRepository;
pub use comment_repo::CommentRepository;
pub use genre_repo::GenreRepository;
pub use review_repo::ReviewRepository;
pub use title_repo::TitleRepository;
pub use user_repo::UserRepository;
