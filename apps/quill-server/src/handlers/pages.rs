//! Public HTML pages.

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};
use serde::{Deserialize, Serialize};

use quill_core::domain::{Post, PostId};

use crate::middleware::error::{AppError, AppResult};
use crate::render::CATEGORIES;
use crate::state::AppState;

#[derive(Serialize)]
struct IndexPage {
    posts: Vec<Post>,
    recent_posts: Vec<Post>,
    categories: &'static [&'static str],
}

#[derive(Serialize)]
struct PostPage {
    post: Post,
    recent_posts: Vec<Post>,
    categories: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct PostQuery {
    id: Option<String>,
}

impl PostQuery {
    fn post_id(&self) -> Result<PostId, AppError> {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| AppError::BadRequest("Invalid post ID".to_string()))
    }
}

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let home = state.posts.home_page().await?;

    let page = IndexPage {
        posts: home.posts,
        recent_posts: home.recent_posts,
        categories: &CATEGORIES,
    };
    Ok(html(state.templates.render("index", &page)?))
}

/// GET /post?id=N
pub async fn show_post(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let id = query.post_id()?;
    let view = state.posts.post_page(id).await?;

    let page = PostPage {
        post: view.post,
        recent_posts: view.recent_posts,
        categories: &CATEGORIES,
    };
    Ok(html(state.templates.render("post", &page)?))
}

/// Fallback for paths no route matches.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("No page at {}", req.path())))
}
