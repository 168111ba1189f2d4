use std::path::Path;
use std::sync::Arc;

use actix_web::{
    App,
    dev::ServiceResponse,
    http::{StatusCode, header},
    test, web,
};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use serde_json::Value;

use quill_core::PostService;
use quill_core::domain::{Post, PostDraft, Role};
use quill_infra::auth::Credential;
use quill_infra::{InMemoryPostStore, StaticUserDirectory};

use super::configure_routes;
use crate::config::AppEnv;
use crate::render::Templates;
use crate::state::AppState;

fn fixture_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post::from_draft(1, PostDraft::new("First live post").published(), now),
        Post::from_draft(2, PostDraft::new("Hidden draft"), now),
        Post::from_draft(3, PostDraft::new("Second live post").published(), now),
    ]
}

fn test_state(env: AppEnv) -> AppState {
    let argon2 = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(1024, 1, 1, None).unwrap(),
    );
    let users = StaticUserDirectory::from_credentials(
        argon2,
        &[Credential {
            username: "admin",
            password: "admin123",
            role: Role::Admin,
        }],
    )
    .unwrap();
    let templates =
        Templates::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")).unwrap();

    AppState::from_parts(
        PostService::new(Arc::new(InMemoryPostStore::with_posts(fixture_posts()))),
        Arc::new(users),
        Arc::new(templates),
        env,
    )
}

macro_rules! app {
    ($env:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state($env)))
                .configure(configure_routes),
        )
        .await
    };
}

fn basic(user: &str, password: &str) -> (header::HeaderName, String) {
    (
        header::AUTHORIZATION,
        format!("Basic {}", STANDARD.encode(format!("{user}:{password}"))),
    )
}

async fn body_text(resp: ServiceResponse) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_health() {
    let app = app!(AppEnv::Development);
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Blog CMS is running");
}

#[actix_web::test]
async fn test_api_lists_published_posts_in_order() {
    let app = app!(AppEnv::Development);
    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], 1);
    assert_eq!(posts[1]["id"], 3);
    assert!(posts.iter().all(|p| p["published"] == true));

    let post = posts[0].as_object().unwrap();
    for key in [
        "id",
        "title",
        "content",
        "author",
        "excerpt",
        "created_at",
        "updated_at",
        "published",
        "tags",
        "image_url",
    ] {
        assert!(post.contains_key(key), "missing {key}");
    }
    assert_eq!(post.len(), 10);
}

#[actix_web::test]
async fn test_index_shows_only_published() {
    let app = app!(AppEnv::Development);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("First live post"));
    assert!(body.contains("Second live post"));
    assert!(!body.contains("Hidden draft"));
}

#[actix_web::test]
async fn test_post_page() {
    let app = app!(AppEnv::Development);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/post?id=3").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Second live post"));
    // sidebar lists the other published post
    assert!(body.contains("/post?id=1"));
}

#[actix_web::test]
async fn test_post_page_rejects_bad_ids() {
    let app = app!(AppEnv::Development);

    for uri in ["/post?id=abc", "/post", "/post?id=-1"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    for uri in ["/post?id=99", "/post?id=0"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_admin_requires_credentials_in_production() {
    let app = app!(AppEnv::Production);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap().to_str().unwrap(),
        r#"Basic realm="restricted""#
    );

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(basic("admin", "wrong"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(basic("admin", "admin123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Hidden draft"));
}

#[actix_web::test]
async fn test_admin_is_open_in_development() {
    let app = app!(AppEnv::Development);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_create_post_via_form() {
    let app = app!(AppEnv::Production);

    let req = test::TestRequest::post()
        .uri("/admin")
        .insert_header(basic("admin", "admin123"))
        .set_form(vec![
            ("title", "Fresh post"),
            ("content", "Body"),
            ("author", "Jane"),
            ("excerpt", "Short"),
            ("tags", "rust"),
            ("tags", "web"),
            ("published", "on"),
            ("image_url", "/static/images/fresh.jpg"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/admin"
    );

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let posts = body.as_array().unwrap();
    let created = posts.last().unwrap();

    assert_eq!(posts.len(), 3);
    assert_eq!(created["id"], 4);
    assert_eq!(created["title"], "Fresh post");
    assert_eq!(created["tags"], serde_json::json!(["rust", "web"]));
}

#[actix_web::test]
async fn test_unpublished_form_post_stays_out_of_api() {
    let app = app!(AppEnv::Development);

    let req = test::TestRequest::post()
        .uri("/admin")
        .set_form(vec![("title", "Not yet")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/post?id=4").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_create_post_rejected_without_credentials() {
    let app = app!(AppEnv::Production);

    let req = test::TestRequest::post()
        .uri("/admin")
        .set_form(vec![("title", "Sneaky")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_create_post_accepts_long_content() {
    let app = app!(AppEnv::Development);
    let content = "x".repeat(20_000);

    let req = test::TestRequest::post()
        .uri("/admin")
        .set_form(vec![
            ("title", "Long read"),
            ("content", content.as_str()),
            ("published", "on"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[2]["content"].as_str().unwrap().len(), 20_000);
}

#[actix_web::test]
async fn test_unknown_path_returns_problem_json() {
    let app = app!(AppEnv::Development);
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
}
