//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod profile;

#[cfg(test)]
mod test_support;

use actix_web::web;
use uuid::Uuid;

use hilite_core::DomainError;
use hilite_core::error::RepoError;

use crate::middleware::error::AppError;

/// Map a store `NotFound` onto the entity the caller asked for.
fn not_found(entity_type: &'static str, id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound { entity_type, id }.into(),
        other => other.into(),
    }
}

/// Extraction failures (body, query string, path segment) are malformed
/// requests (400), distinct from validation failures of a well-formed body (422).
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/feed", web::get().to(posts::feed))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Protected routes
            .route("/profile/bio", web::put().to(profile::update_bio))
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .service(
                        web::resource("/{id}/like")
                            .route(web::post().to(posts::like_post))
                            .route(web::delete().to(posts::unlike_post)),
                    )
                    .route("/{id}/comments", web::post().to(posts::add_comment)),
            ),
    );
}
