use actix_web::{get, web, HttpResponse, Responder};

use crate::{errors::AppError, AppState};

#[get("/projects")]
pub async fn list_projects(state: web::Data<AppState>) -> impl Responder {
    let projects = state.project_directory.list().await;
    HttpResponse::Ok().json(projects)
}

#[get("/projects/{slug}")]
pub async fn get_project(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slug = slug.into_inner();

    match state.project_directory.get_by_slug(&slug).await {
        Some(project) => Ok(HttpResponse::Ok().json(project)),
        None => Err(AppError::NotFound(format!("No project matches slug '{}'", slug))),
    }
}
