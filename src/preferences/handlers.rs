use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    preferences::models::{load, preferences_file, store, SetTheme},
    utils::error::ResponseError,
};

#[get("/theme")]
async fn get_theme() -> impl Responder {
    let preferences = load(&preferences_file());
    HttpResponse::Ok().json(preferences.theme)
}

#[post("/theme")]
async fn set_theme(theme: web::Json<SetTheme>) -> impl Responder {
    let path = preferences_file();
    let mut preferences = load(&path);
    preferences.theme = theme.theme;

    match store(&path, &preferences) {
        Ok(_) => HttpResponse::Ok().json(preferences.theme),
        Err(e) => HttpResponse::InternalServerError().json(ResponseError::new(format!(
            "Error writing preferences at path {}: {}",
            path.display(),
            e
        ))),
    }
}
