mod coordinate;

pub use coordinate::{Coordinate, SearchRadius, EARTH_RADIUS_METERS};

use shared_kernel::{non_empty_string, uuid_key};
use thiserror::Error;

uuid_key!(ClinicLocationId);
non_empty_string!(ClinicName);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl ClinicName {
    pub fn parse(value: String) -> Result<Self, ValidationError> {
        value.try_into().map_err(ValidationError::new)
    }
}

/// A clinic location that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewClinicLocation {
    pub name: ClinicName,
    pub address: String,
    pub coordinate: Coordinate,
}

/// A persisted clinic location. Records are immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct ClinicLocation {
    pub id: ClinicLocationId,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl ClinicLocation {
    pub fn from_new(id: ClinicLocationId, location: NewClinicLocation) -> Self {
        Self {
            id,
            name: location.name.into(),
            address: location.address,
            coordinate: location.coordinate,
        }
    }
}
