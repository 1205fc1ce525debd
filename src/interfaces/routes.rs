use actix_web::web;

use crate::handlers::home::home;

mod admin;
mod contact;
mod json_error;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(projects::config_routes)
            .configure(contact::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
