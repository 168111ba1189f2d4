//! Admin pages - listing all posts and the "new post" form.

use actix_web::{HttpResponse, http::header, web};
use serde::Serialize;

use quill_core::domain::{Post, PostDraft};
use quill_shared::dto::CreatePostForm;

use crate::handlers::pages::html;
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::render::CATEGORIES;
use crate::state::AppState;

#[derive(Serialize)]
struct AdminPage {
    posts: Vec<Post>,
    categories: &'static [&'static str],
}

fn into_draft(form: CreatePostForm) -> PostDraft {
    PostDraft {
        title: form.title,
        content: form.content,
        author: form.author,
        excerpt: form.excerpt,
        published: form.published,
        tags: form.tags,
        image_url: form.image_url,
    }
}

/// GET /admin
pub async fn dashboard(
    identity: AdminIdentity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    tracing::debug!(username = %identity.username, "Rendering admin dashboard");

    let page = AdminPage {
        posts: state.posts.list_all().await?,
        categories: &CATEGORIES,
    };
    Ok(html(state.templates.render("admin", &page)?))
}

/// POST /admin - create a post, then redirect back to the dashboard.
pub async fn create_post(
    identity: AdminIdentity,
    request_id: RequestId,
    state: web::Data<AppState>,
    form: web::Form<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let form = CreatePostForm::from_pairs(form.into_inner());
    let post = state.posts.create_post(into_draft(form)).await?;

    tracing::info!(
        post_id = post.id,
        title = %post.title,
        published = post.published,
        username = %identity.username,
        role = ?identity.role,
        request_id = %request_id.as_str(),
        "Post created"
    );

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin"))
        .finish())
}
