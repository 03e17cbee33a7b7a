use actix_web::{get, post, web, HttpResponse, Responder};

use crate::monitor::poller::Poller;

#[get("/status")]
async fn status(poller: web::Data<Poller>) -> impl Responder {
    match poller.status() {
        Ok(current) => HttpResponse::Ok().json(current),
        Err(e) => HttpResponse::InternalServerError().json(e),
    }
}

#[post("/refresh")]
async fn refresh(poller: web::Data<Poller>) -> impl Responder {
    poller.fetch_now().await;
    match poller.status() {
        Ok(current) => HttpResponse::Ok().json(current),
        Err(e) => HttpResponse::InternalServerError().json(e),
    }
}
