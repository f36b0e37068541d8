use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx_postgres::configuration::DbSettings;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    Postgres,
    InMemory,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// The single client origin allowed to make credentialed CORS requests.
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreBackend,
    pub database: DbSettings,
}
