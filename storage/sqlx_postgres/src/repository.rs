use crate::configuration::DbSettings;
use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repository {
    pg_pool: Arc<PgPool>,
}

impl Repository {
    pub fn pool(&self) -> &PgPool {
        self.pg_pool.as_ref()
    }

    pub async fn new(settings: &DbSettings) -> anyhow::Result<Self> {
        let pg_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout())
            .connect_with(settings.with_db())
            .await
            .context("Failed to connect to DB")
            .map(Arc::new)?;

        Ok(Self { pg_pool })
    }

    /// Creates a throwaway database, migrates it and connects to it.
    #[cfg(test)]
    pub async fn new_test_repo() -> Self {
        use serde::Deserialize;
        use sqlx::Executor;
        use sqlx::{Connection, PgConnection};
        use std::path::Path;
        use uuid::Uuid;

        #[derive(Deserialize)]
        struct Settings {
            database: DbSettings,
        }

        let configuration_directory =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configuration");
        let settings: Settings =
            shared_kernel::configuration::config_from(&configuration_directory)
                .expect("Failed to read database settings");
        let connection_options = settings.database.without_db().0;

        let mut connection = PgConnection::connect_with(&connection_options)
            .await
            .expect("Failed to connect to Postgres");

        let db_name = Uuid::new_v4();
        connection
            .execute(&*format!(r#"CREATE DATABASE "{}";"#, db_name))
            .await
            .expect("Failed to create database.");

        let connection_pool = PgPool::connect_with(connection_options.database(&db_name.to_string()))
            .await
            .expect("Failed to connect to Postgres.");

        let test_repo = Self {
            pg_pool: Arc::new(connection_pool),
        };
        test_repo
            .migrate()
            .await
            .expect("Failed to migrate the database");

        test_repo
    }
}
