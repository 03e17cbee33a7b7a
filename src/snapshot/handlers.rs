use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    snapshot::provider::{MetricsProvider, SysinfoProvider},
    utils::error::ResponseError,
};

#[get("/snapshot")]
async fn snapshot(provider: web::Data<SysinfoProvider>) -> impl Responder {
    match provider.system_snapshot().await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => HttpResponse::InternalServerError().json(ResponseError::new(format!(
            "Error collecting system snapshot: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use crate::snapshot::{self, models::SystemSnapshot, provider::SysinfoProvider};

    #[actix_web::test]
    async fn snapshot_endpoint_returns_metrics() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SysinfoProvider::default()))
                .service(web::scope(&snapshot::scope()).configure(snapshot::configure)),
        )
        .await;

        let req = test::TestRequest::get().uri("/system/snapshot").to_request();
        let snapshot: SystemSnapshot = test::call_and_read_body_json(&app, req).await;

        assert!(snapshot.cpu_cores > 0);
        assert!(snapshot.total_memory > 0);
    }
}
