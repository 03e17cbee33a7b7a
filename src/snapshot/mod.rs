use actix_web::web::ServiceConfig;

pub mod handlers;
pub mod models;
pub mod provider;

pub fn scope() -> String {
    "/system".to_string()
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(handlers::snapshot);
}
