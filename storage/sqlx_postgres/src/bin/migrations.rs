use serde::Deserialize;
use shared_kernel::configuration::config;
use sqlx_postgres::configuration::DbSettings;
use sqlx_postgres::repository::Repository;

#[derive(Deserialize)]
struct Settings {
    database: DbSettings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = config::<Settings>()?;
    let repo = Repository::new(&settings.database).await?;
    repo.migrate().await
}
