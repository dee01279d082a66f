//! Bulk CSV import
//!
//! One-time data loading from the CSV dumps the platform originally
//! shipped with. Source rows carry integer ids; the importer generates a
//! UUID per row and resolves cross-references through in-memory id maps,
//! inserting in dependency order: users, categories, genres, titles,
//! genre links, reviews, comments.

mod records;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub use records::{
    CategoryRecord, CommentRecord, GenreRecord, GenreTitleRecord, ReviewRecord, TitleRecord,
    UserRecord,
};

/// Maps a source CSV integer id to the generated row UUID
type IdMap = HashMap<i64, Uuid>;

/// Read and deserialize all records from a CSV file
pub fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let record: T = result
            .with_context(|| format!("Bad record at {} line {}", path.display(), line + 2))?;
        records.push(record);
    }

    Ok(records)
}

/// Import every CSV file found in `dir`
pub async fn import_all(pool: &PgPool, dir: &Path) -> Result<()> {
    let users = import_users(pool, &dir.join("users.csv")).await?;
    let categories = import_categories(pool, &dir.join("category.csv")).await?;
    let genres = import_genres(pool, &dir.join("genre.csv")).await?;
    let titles = import_titles(pool, &dir.join("titles.csv"), &categories).await?;
    import_genre_titles(pool, &dir.join("genre_title.csv"), &titles, &genres).await?;
    let reviews = import_reviews(pool, &dir.join("review.csv"), &titles, &users).await?;
    import_comments(pool, &dir.join("comments.csv"), &reviews, &users).await?;

    Ok(())
}

async fn import_users(pool: &PgPool, path: &Path) -> Result<IdMap> {
    let records: Vec<UserRecord> = read_records(path)?;
    let mut map = IdMap::with_capacity(records.len());

    for record in &records {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, role, bio)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.role)
        .bind(record.bio.as_deref().unwrap_or(""))
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert user {}", record.username))?;

        map.insert(record.id, id);
    }

    tracing::info!(count = records.len(), "Imported users");
    Ok(map)
}

async fn import_categories(pool: &PgPool, path: &Path) -> Result<IdMap> {
    let records: Vec<CategoryRecord> = read_records(path)?;
    let mut map = IdMap::with_capacity(records.len());

    for record in &records {
        let id = Uuid::new_v4();
        sqlx::query(r#"INSERT INTO categories (id, name, slug) VALUES ($1, $2, $3)"#)
            .bind(id)
            .bind(&record.name)
            .bind(&record.slug)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to insert category {}", record.slug))?;

        map.insert(record.id, id);
    }

    tracing::info!(count = records.len(), "Imported categories");
    Ok(map)
}

async fn import_genres(pool: &PgPool, path: &Path) -> Result<IdMap> {
    let records: Vec<GenreRecord> = read_records(path)?;
    let mut map = IdMap::with_capacity(records.len());

    for record in &records {
        let id = Uuid::new_v4();
        sqlx::query(r#"INSERT INTO genres (id, name, slug) VALUES ($1, $2, $3)"#)
            .bind(id)
            .bind(&record.name)
            .bind(&record.slug)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to insert genre {}", record.slug))?;

        map.insert(record.id, id);
    }

    tracing::info!(count = records.len(), "Imported genres");
    Ok(map)
}

async fn import_titles(pool: &PgPool, path: &Path, categories: &IdMap) -> Result<IdMap> {
    let records: Vec<TitleRecord> = read_records(path)?;
    let mut map = IdMap::with_capacity(records.len());

    for record in &records {
        let category_id = resolve(categories, record.category, "category", record.id)?;

        let id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO titles (id, name, year, category_id) VALUES ($1, $2, $3, $4)"#,
        )
        .bind(id)
        .bind(&record.name)
        .bind(record.year)
        .bind(category_id)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert title {}", record.name))?;

        map.insert(record.id, id);
    }

    tracing::info!(count = records.len(), "Imported titles");
    Ok(map)
}

async fn import_genre_titles(
    pool: &PgPool,
    path: &Path,
    titles: &IdMap,
    genres: &IdMap,
) -> Result<()> {
    let records: Vec<GenreTitleRecord> = read_records(path)?;

    for record in &records {
        let title_id = resolve(titles, record.title_id, "title", record.id)?;
        let genre_id = resolve(genres, record.genre_id, "genre", record.id)?;

        sqlx::query(r#"INSERT INTO genre_titles (title_id, genre_id) VALUES ($1, $2)"#)
            .bind(title_id)
            .bind(genre_id)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to link title/genre row {}", record.id))?;
    }

    tracing::info!(count = records.len(), "Imported genre links");
    Ok(())
}

async fn import_reviews(
    pool: &PgPool,
    path: &Path,
    titles: &IdMap,
    users: &IdMap,
) -> Result<IdMap> {
    let records: Vec<ReviewRecord> = read_records(path)?;
    let mut map = IdMap::with_capacity(records.len());

    for record in &records {
        let title_id = resolve(titles, record.title_id, "title", record.id)?;
        let author_id = resolve(users, record.author, "user", record.id)?;
        let pub_date = parse_pub_date(&record.pub_date, record.id)?;

        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO reviews (id, title_id, author_id, text, score, pub_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(title_id)
        .bind(author_id)
        .bind(&record.text)
        .bind(record.score)
        .bind(pub_date)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert review row {}", record.id))?;

        map.insert(record.id, id);
    }

    tracing::info!(count = records.len(), "Imported reviews");
    Ok(map)
}

async fn import_comments(
    pool: &PgPool,
    path: &Path,
    reviews: &IdMap,
    users: &IdMap,
) -> Result<()> {
    let records: Vec<CommentRecord> = read_records(path)?;

    for record in &records {
        let review_id = resolve(reviews, record.review_id, "review", record.id)?;
        let author_id = resolve(users, record.author, "user", record.id)?;
        let pub_date = parse_pub_date(&record.pub_date, record.id)?;

        sqlx::query(
            r#"
            INSERT INTO comments (id, review_id, author_id, text, pub_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(review_id)
        .bind(author_id)
        .bind(&record.text)
        .bind(pub_date)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert comment row {}", record.id))?;
    }

    tracing::info!(count = records.len(), "Imported comments");
    Ok(())
}

fn resolve(map: &IdMap, source_id: i64, kind: &str, row: i64) -> Result<Uuid> {
    map.get(&source_id)
        .copied()
        .ok_or_else(|| anyhow!("Row {} references unknown {} id {}", row, kind, source_id))
}

fn parse_pub_date(raw: &str, row: i64) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Row {} has an unparseable pub_date: {}", row, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("tempfile");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn test_read_user_records() {
        let file = write_csv(
            "id,username,email,role,bio\n\
             1,alice,alice@example.com,user,Reads a lot\n\
             2,bob,bob@example.com,moderator,\n",
        );

        let records: Vec<UserRecord> = read_records(file.path()).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].username, "alice");
        assert_eq!(records[1].role, "moderator");
    }

    #[test]
    fn test_read_title_records() {
        let file = write_csv(
            "id,name,year,category\n\
             1,Dune,1965,2\n",
        );

        let records: Vec<TitleRecord> = read_records(file.path()).expect("parse");
        assert_eq!(records[0].name, "Dune");
        assert_eq!(records[0].year, 1965);
        assert_eq!(records[0].category, 2);
    }

    #[test]
    fn test_read_review_records() {
        let file = write_csv(
            "id,title_id,text,author,score,pub_date\n\
             1,7,\"Loved it, truly\",3,9,2019-09-24T21:08:21.567Z\n",
        );

        let records: Vec<ReviewRecord> = read_records(file.path()).expect("parse");
        assert_eq!(records[0].score, 9);
        assert_eq!(records[0].text, "Loved it, truly");
        assert!(parse_pub_date(&records[0].pub_date, 1).is_ok());
    }

    #[test]
    fn test_bad_record_is_an_error() {
        let file = write_csv("id,name,year,category\n1,Dune,not-a-year,2\n");
        let result: Result<Vec<TitleRecord>> = read_records(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_unknown_id() {
        let mut map = IdMap::new();
        map.insert(1, Uuid::new_v4());

        assert!(resolve(&map, 1, "category", 10).is_ok());
        let err = resolve(&map, 99, "category", 10).unwrap_err();
        assert!(err.to_string().contains("unknown category id 99"));
    }
}
