use actix_web::web::ServiceConfig;

pub mod handlers;
pub mod models;

pub fn scope() -> String {
    "/preferences".to_string()
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(handlers::get_theme);
    cfg.service(handlers::set_theme);
}
