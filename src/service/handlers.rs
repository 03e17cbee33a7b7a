use actix_web::{get, HttpResponse, Responder};

use crate::service::models::ServiceStatus;

#[get("/statuses")]
async fn statuses() -> impl Responder {
    HttpResponse::Ok().json(ServiceStatus::options())
}
