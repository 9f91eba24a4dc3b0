/**
 * Blog Model and Database Operations
 *
 * This module handles blog post data and database operations. Listings are
 * ordered by creation time descending; the author, when present, is joined
 * in as a small public projection.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Maximum number of related posts returned alongside a single post.
const RELATED_LIMIT: i64 = 5;

/// Blog post row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    /// Path to the stored cover image, e.g. "/uploads/1693-cover.png"
    pub image_url: String,
    /// Optional author reference
    pub author_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public author projection joined into blog listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogAuthor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// A blog post together with its author projection, when one exists
#[derive(Debug, Clone)]
pub struct BlogWithAuthor {
    pub blog: Blog,
    pub author: Option<BlogAuthor>,
}

/// Fields required to create a post
#[derive(Debug)]
pub struct NewBlog {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image_url: String,
    pub author_id: Option<i64>,
}

/// Partial post update; `None` fields are left unchanged
#[derive(Debug, Default)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
}

/// Flat row shape for the LEFT JOIN queries
#[derive(sqlx::FromRow)]
struct BlogAuthorRow {
    id: i64,
    title: String,
    excerpt: String,
    body: String,
    image_url: String,
    author_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
    author_username: Option<String>,
}

impl From<BlogAuthorRow> for BlogWithAuthor {
    fn from(row: BlogAuthorRow) -> Self {
        let author = match (
            row.author_id,
            row.author_first_name,
            row.author_last_name,
            row.author_username,
        ) {
            (Some(id), Some(first_name), Some(last_name), Some(username)) => Some(BlogAuthor {
                id,
                first_name,
                last_name,
                username,
            }),
            _ => None,
        };

        Self {
            blog: Blog {
                id: row.id,
                title: row.title,
                excerpt: row.excerpt,
                body: row.body,
                image_url: row.image_url,
                author_id: row.author_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author,
        }
    }
}

const JOINED_SELECT: &str = "SELECT b.id, b.title, b.excerpt, b.body, b.image_url, b.author_id,
            b.created_at, b.updated_at,
            u.first_name AS author_first_name,
            u.last_name AS author_last_name,
            u.username AS author_username
     FROM blogs b
     LEFT JOIN users u ON u.id = b.author_id";

/// Create a new blog post
pub async fn create_blog(pool: &PgPool, new_blog: NewBlog) -> Result<Blog, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "INSERT INTO blogs (title, excerpt, body, image_url, author_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, title, excerpt, body, image_url, author_id, created_at, updated_at",
    )
    .bind(&new_blog.title)
    .bind(&new_blog.excerpt)
    .bind(&new_blog.body)
    .bind(&new_blog.image_url)
    .bind(new_blog.author_id)
    .fetch_one(pool)
    .await
}

/// List all posts, newest first, each with its author projection
pub async fn list_blogs(pool: &PgPool) -> Result<Vec<BlogWithAuthor>, sqlx::Error> {
    let query = format!("{JOINED_SELECT} ORDER BY b.created_at DESC, b.id DESC");

    let rows = sqlx::query_as::<_, BlogAuthorRow>(&query)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(BlogWithAuthor::from).collect())
}

/// Get a single post by id, with its author projection
pub async fn get_blog(pool: &PgPool, id: i64) -> Result<Option<BlogWithAuthor>, sqlx::Error> {
    let query = format!("{JOINED_SELECT} WHERE b.id = $1");

    let row = sqlx::query_as::<_, BlogAuthorRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(BlogWithAuthor::from))
}

/// Up to 5 other posts by the same author, newest first
///
/// `IS NOT DISTINCT FROM` makes authorless posts relate to other authorless
/// posts, matching the historical behavior of the service.
pub async fn related_blogs(
    pool: &PgPool,
    author_id: Option<i64>,
    exclude_id: i64,
) -> Result<Vec<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "SELECT id, title, excerpt, body, image_url, author_id, created_at, updated_at
         FROM blogs
         WHERE author_id IS NOT DISTINCT FROM $1 AND id <> $2
         ORDER BY created_at DESC, id DESC
         LIMIT $3",
    )
    .bind(author_id)
    .bind(exclude_id)
    .bind(RELATED_LIMIT)
    .fetch_all(pool)
    .await
}

/// List posts by a specific author, newest first
pub async fn blogs_by_author(pool: &PgPool, author_id: i64) -> Result<Vec<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "SELECT id, title, excerpt, body, image_url, author_id, created_at, updated_at
         FROM blogs
         WHERE author_id = $1
         ORDER BY created_at DESC, id DESC",
    )
    .bind(author_id)
    .fetch_all(pool)
    .await
}

/// Apply a partial update; `None` fields keep their current value
pub async fn update_blog(
    pool: &PgPool,
    id: i64,
    update: BlogUpdate,
) -> Result<Option<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        "UPDATE blogs
         SET title = COALESCE($2, title),
             excerpt = COALESCE($3, excerpt),
             body = COALESCE($4, body),
             image_url = COALESCE($5, image_url),
             updated_at = now()
         WHERE id = $1
         RETURNING id, title, excerpt, body, image_url, author_id, created_at, updated_at",
    )
    .bind(id)
    .bind(update.title)
    .bind(update.excerpt)
    .bind(update.body)
    .bind(update.image_url)
    .fetch_optional(pool)
    .await
}

/// Delete a post by id; returns the number of rows removed
pub async fn delete_blog(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
