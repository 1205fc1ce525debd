use actix_web::{web, HttpResponse};

use crate::{entities::contact::ContactForm, errors::AppError, AppState};

pub async fn create_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<HttpResponse, AppError> {
    let response = state.contact_relay.submit(form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
