use crate::configuration::{Settings, StoreBackend};
use crate::use_case_app_container::UseCaseAppContainer;
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use in_memory::InMemoryLocationStore;
use shared_kernel::configuration::config;
use sqlx_postgres::repository::Repository;
use tracing_actix_web::TracingLogger;
use use_cases::AppImpl;

mod configuration;
mod errors;
mod routes;
mod use_case_app_container;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("clinic_locator")?;
    let result = start().await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn build_app(settings: &Settings) -> anyhow::Result<AppImpl> {
    match settings.store {
        StoreBackend::Postgres => {
            let repository = Repository::new(&settings.database).await?;
            repository.migrate().await?;
            Ok(AppImpl::new(repository))
        }
        StoreBackend::InMemory => {
            tracing::warn!("Using the in-memory location store, registrations are not persisted");
            Ok(AppImpl::new(InMemoryLocationStore::new()))
        }
    }
}

async fn start() -> anyhow::Result<()> {
    let settings = config::<Settings>()?;
    let app_container = web::Data::new(UseCaseAppContainer::new(build_app(&settings).await?));
    let allowed_origin = settings.application.allowed_origin.clone();
    let address = (settings.application.host.clone(), settings.application.port);

    tracing::info!(?address, %allowed_origin, "Starting server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(app_container.clone())
            .configure(routes::config)
    })
    .bind(address)?
    .run()
    .await
    .context("Server failed to run")
}
