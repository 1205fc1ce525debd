use actix_web::{http::StatusCode, web, HttpResponse};

use crate::handlers::{contact, json_error::json_error};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::create_contact))
            .default_service(web::route().to(method_not_allowed)),
    );
}

async fn method_not_allowed() -> HttpResponse {
    json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "Le formulaire de contact n'accepte que POST",
    )
}
