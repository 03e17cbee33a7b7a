use actix_web::web::ServiceConfig;

pub mod handlers;
pub mod models;
pub mod poller;

pub fn scope() -> String {
    "/monitor".to_string()
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(handlers::status);
    cfg.service(handlers::refresh);
}
