/**
 * Blog Endpoint Handlers
 *
 * HTTP handlers for the blog routes:
 *
 * - `POST /api/blogs`            - create a post (multipart, image required)
 * - `GET /api/blogs`             - list all posts, newest first
 * - `GET /api/blogs/{id}`        - one post plus up to 5 related posts
 * - `GET /api/myblogs/{userId}`  - posts by a given author
 * - `PUT /api/blogs/{id}`        - partial update (multipart, image optional)
 * - `DELETE /api/blogs/{id}`     - delete by id
 *
 * These endpoints do not check ownership; see the note in the route table.
 */

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::blog::db::{
    self, Blog, BlogAuthor, BlogUpdate, BlogWithAuthor, NewBlog,
};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::uploads::save_upload;

/// Public author projection on the wire
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl From<BlogAuthor> for AuthorResponse {
    fn from(author: BlogAuthor) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            username: author.username,
        }
    }
}

/// Blog post on the wire; `author` is always present, null when the post
/// has no author or the endpoint does not join one in
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub image_url: String,
    pub author_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub author: Option<AuthorResponse>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            excerpt: blog.excerpt,
            body: blog.body,
            image_url: blog.image_url,
            author_id: blog.author_id,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
            author: None,
        }
    }
}

impl From<BlogWithAuthor> for BlogResponse {
    fn from(with_author: BlogWithAuthor) -> Self {
        let mut response = BlogResponse::from(with_author.blog);
        response.author = with_author.author.map(AuthorResponse::from);
        response
    }
}

/// Response carrying a message and the affected post
#[derive(Serialize, Debug)]
pub struct BlogEnvelope {
    pub message: String,
    pub blog: BlogResponse,
}

/// Single-post response: the post plus related posts by the same author
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailResponse {
    pub blog: BlogResponse,
    pub related_blogs: Vec<BlogResponse>,
}

/// Multipart fields accepted by create and update
#[derive(Debug, Default)]
struct BlogForm {
    title: Option<String>,
    excerpt: Option<String>,
    body: Option<String>,
    author_id: Option<i64>,
    image_url: Option<String>,
}

/// Read the multipart body shared by create and update
///
/// Text parts: `title`, `excerpt`, `body`, `authorId`. File part: `image`,
/// stored immediately and carried as its public `/uploads/...` path.
async fn read_blog_form(state: &AppState, mut multipart: Multipart) -> Result<BlogForm, ApiError> {
    let mut form = BlogForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "excerpt" => form.excerpt = Some(read_text(field).await?),
            "body" => form.body = Some(read_text(field).await?),
            "authorId" => {
                let raw = read_text(field).await?;
                if !raw.is_empty() {
                    let parsed = raw.parse::<i64>().map_err(|_| {
                        ApiError::BadRequest(format!("Invalid authorId: {raw}"))
                    })?;
                    form.author_id = Some(parsed);
                }
            }
            "image" => {
                let original_name = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
                form.image_url = Some(save_upload(&state.uploads_dir, &original_name, &bytes).await?);
            }
            other => {
                tracing::debug!("Ignoring unknown blog field: {}", other);
            }
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart field: {e}")))
}

/// Create post handler
///
/// # Errors
///
/// * `400 Bad Request` - a text field or the image file is missing
pub async fn create_blog(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<BlogEnvelope>), ApiError> {
    let form = read_blog_form(&state, multipart).await?;

    let new_blog = NewBlog {
        title: form
            .title
            .ok_or_else(|| ApiError::BadRequest("Missing field: title".to_string()))?,
        excerpt: form
            .excerpt
            .ok_or_else(|| ApiError::BadRequest("Missing field: excerpt".to_string()))?,
        body: form
            .body
            .ok_or_else(|| ApiError::BadRequest("Missing field: body".to_string()))?,
        image_url: form
            .image_url
            .ok_or_else(|| ApiError::BadRequest("Missing image file".to_string()))?,
        author_id: form.author_id,
    };

    let blog = db::create_blog(&state.pool, new_blog).await?;

    tracing::info!("Blog created: {} ({})", blog.title, blog.id);

    Ok((
        StatusCode::CREATED,
        Json(BlogEnvelope {
            message: "Blog created".to_string(),
            blog: BlogResponse::from(blog),
        }),
    ))
}

/// List posts handler
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    let blogs = db::list_blogs(&state.pool).await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Get-one-post handler: the post plus up to 5 related posts
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogDetailResponse>, ApiError> {
    let with_author = db::get_blog(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;

    let related = db::related_blogs(&state.pool, with_author.blog.author_id, id).await?;

    Ok(Json(BlogDetailResponse {
        blog: BlogResponse::from(with_author),
        related_blogs: related.into_iter().map(BlogResponse::from).collect(),
    }))
}

/// List posts by author handler
pub async fn list_blogs_by_author(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    let blogs = db::blogs_by_author(&state.pool, user_id).await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Update post handler: partial merge, image replaced only if supplied
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<BlogEnvelope>, ApiError> {
    let form = read_blog_form(&state, multipart).await?;

    let update = BlogUpdate {
        title: form.title,
        excerpt: form.excerpt,
        body: form.body,
        image_url: form.image_url,
    };

    let blog = db::update_blog(&state.pool, id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;

    tracing::info!("Blog updated: {}", blog.id);

    Ok(Json(BlogEnvelope {
        message: "Blog updated".to_string(),
        blog: BlogResponse::from(blog),
    }))
}

/// Delete post handler
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = db::delete_blog(&state.pool, id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Blog not found".to_string()));
    }

    tracing::info!("Blog deleted: {}", id);

    Ok(Json(serde_json::json!({ "message": "Blog deleted" })))
}
