use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(projects::list_projects);
    cfg.service(projects::get_project);
}
