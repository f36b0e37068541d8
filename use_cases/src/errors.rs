use entities::locations::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicLocationError {
    #[error("{0}")]
    ValidationError(#[from] ValidationError),
    #[error("Internal error")]
    StoreError(#[from] anyhow::Error),
}
