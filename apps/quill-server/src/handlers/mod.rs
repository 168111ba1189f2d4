//! HTTP handlers and route configuration.

mod admin;
mod api;
mod health;
mod pages;

use actix_web::web;

/// Largest accepted admin form body (10 MiB).
pub const FORM_LIMIT: usize = 10 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT))
        // Public pages
        .route("/", web::get().to(pages::index))
        .route("/post", web::get().to(pages::show_post))
        .route("/health", web::get().to(health::health_check))
        // Admin
        .service(
            web::resource("/admin")
                .route(web::get().to(admin::dashboard))
                .route(web::post().to(admin::create_post)),
        )
        // Public API
        .service(web::scope("/api").route("/posts", web::get().to(api::list_posts)))
        .default_service(web::to(pages::not_found));
}

#[cfg(test)]
mod tests;
