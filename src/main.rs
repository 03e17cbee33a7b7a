use std::{fs::create_dir_all, sync::Arc, time::Duration};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use monitor::poller::Poller;
use snapshot::provider::SysinfoProvider;
use utils::env::{datadir, hostname, pollinterval, port};

mod monitor;
mod preferences;
mod service;
mod snapshot;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    // Create data directories
    {
        let dir = datadir();
        create_dir_all(&dir).inspect_err(|e| {
            log::error!("Could not create data dir at {}: {}", dir.display(), e)
        })?;
    }

    // Log env for debugging
    log::info!("Using env:");
    log::info!("HOSTNAME {}", hostname());
    log::info!("PORT {}", port());
    log::info!("DATADIR {}", datadir().display());
    log::info!("POLL_INTERVAL {}ms", pollinterval());

    // One provider shared by the poller and the on-demand snapshot endpoint
    let provider = Arc::new(SysinfoProvider::default());
    let poller =
        web::Data::new(Poller::spawn(provider.clone(), Duration::from_millis(pollinterval())).await);

    let poller_data = poller.clone();
    let provider_data = web::Data::from(provider);

    // Start server
    let result = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(poller_data.clone())
            .app_data(provider_data.clone())
            .service(web::scope(&monitor::scope()).configure(monitor::configure))
            .service(web::scope(&preferences::scope()).configure(preferences::configure))
            .service(web::scope(&service::scope()).configure(service::configure))
            .service(web::scope(&snapshot::scope()).configure(snapshot::configure))
    })
    .bind(format!("{}:{}", hostname(), port()))?
    .run()
    .await;

    poller.stop_auto_refresh();
    result
}
