use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::analysis::ResumePipeline;
use crate::error::{Error, ErrorBody, ErrorKind};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/user/{username}/resume/", web::get().to(get_resume))
        .route("/user/{username}/resume", web::get().to(get_resume))
        .route("/user/{username}/projects/", web::get().to(get_projects))
        .route("/user/{username}/projects", web::get().to(get_projects));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn get_resume(
    pipeline: web::Data<ResumePipeline>,
    username: web::Path<String>,
) -> HttpResponse {
    let username = username.into_inner();
    match pipeline.build_resume(&username).await {
        Ok(resume) => HttpResponse::Ok().json(resume),
        Err(err) => error_response(&err, &username),
    }
}

async fn get_projects(
    pipeline: web::Data<ResumePipeline>,
    username: web::Path<String>,
) -> HttpResponse {
    let username = username.into_inner();
    match pipeline.list_projects(&username).await {
        Ok(repos) => HttpResponse::Ok().json(repos),
        Err(err) => error_response(&err, &username),
    }
}

fn error_response(err: &Error, username: &str) -> HttpResponse {
    let body = ErrorBody::from_error(err, username);
    match err.kind() {
        ErrorKind::UserNotFound => {
            tracing::info!("GitHub user not found: {}", username);
            HttpResponse::NotFound().json(body)
        }
        ErrorKind::FetchFailed => {
            tracing::warn!("Failed to build response for {}: {}", username, err);
            HttpResponse::BadGateway().json(body)
        }
    }
}
