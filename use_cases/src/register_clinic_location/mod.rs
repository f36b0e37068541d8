use crate::errors::ClinicLocationError;
use crate::repositories::LocationStore;
use async_trait::async_trait;
use entities::locations::{ClinicLocation, ClinicName, Coordinate, NewClinicLocation};
use std::sync::Arc;

/// Registration as submitted by a clinic. `latitude` and `longitude` arrive in
/// reading order and are flipped into a longitude-first [`Coordinate`].
#[derive(Debug, Clone)]
pub struct ClinicRegistration {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<ClinicRegistration> for NewClinicLocation {
    type Error = ClinicLocationError;

    fn try_from(value: ClinicRegistration) -> Result<Self, Self::Error> {
        Ok(NewClinicLocation {
            name: ClinicName::parse(value.name)?,
            address: value.address,
            coordinate: Coordinate::new(value.longitude, value.latitude)?,
        })
    }
}

#[async_trait]
pub trait RegisterClinicLocationInteractor: Send + Sync {
    async fn register(
        &self,
        registration: ClinicRegistration,
    ) -> Result<ClinicLocation, ClinicLocationError>;
}

pub struct RegisterClinicLocationInteractorImpl {
    store: Arc<dyn LocationStore>,
}

impl RegisterClinicLocationInteractorImpl {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegisterClinicLocationInteractor for RegisterClinicLocationInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn register(
        &self,
        registration: ClinicRegistration,
    ) -> Result<ClinicLocation, ClinicLocationError> {
        let location = NewClinicLocation::try_from(registration)?;
        let location = self.store.insert(location).await?;
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_store::{RecordingStore, StoreCall};
    use rstest::rstest;

    fn registration(latitude: f64, longitude: f64) -> ClinicRegistration {
        ClinicRegistration {
            name: "Apollo Clinic".to_string(),
            address: "Bannerghatta Road, Bengaluru".to_string(),
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn test_registration_stores_longitude_first() {
        let store = Arc::new(RecordingStore::default());
        let interactor = RegisterClinicLocationInteractorImpl::new(store.clone());

        let location = interactor
            .register(registration(12.9716, 77.5946))
            .await
            .unwrap();

        assert_eq!(location.coordinate.to_lng_lat(), [77.5946, 12.9716]);
        assert_eq!(location.name, "Apollo Clinic");
        assert_eq!(location.address, "Bannerghatta Road, Bengaluru");

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            StoreCall::Insert(inserted) => {
                assert_eq!(inserted.coordinate.longitude(), 77.5946);
                assert_eq!(inserted.coordinate.latitude(), 12.9716);
            }
            other => panic!("Unexpected store call {other:?}"),
        }
    }

    #[rstest]
    #[case(f64::NAN, 77.5946)]
    #[case(12.9716, f64::NAN)]
    #[case(95.0, 77.5946)]
    #[case(12.9716, -200.0)]
    #[tokio::test]
    async fn test_invalid_coordinates_never_reach_the_store(
        #[case] latitude: f64,
        #[case] longitude: f64,
    ) {
        let store = Arc::new(RecordingStore::default());
        let interactor = RegisterClinicLocationInteractorImpl::new(store.clone());

        let result = interactor.register(registration(latitude, longitude)).await;

        assert!(matches!(
            result,
            Err(ClinicLocationError::ValidationError(_))
        ));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_name_is_a_validation_error() {
        let store = Arc::new(RecordingStore::default());
        let interactor = RegisterClinicLocationInteractorImpl::new(store.clone());

        let result = interactor
            .register(ClinicRegistration {
                name: " ".to_string(),
                ..registration(12.9716, 77.5946)
            })
            .await;

        assert!(matches!(
            result,
            Err(ClinicLocationError::ValidationError(_))
        ));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_store_errors() {
        let store = Arc::new(RecordingStore::failing());
        let interactor = RegisterClinicLocationInteractorImpl::new(store);

        let result = interactor.register(registration(12.9716, 77.5946)).await;

        assert!(matches!(result, Err(ClinicLocationError::StoreError(_))));
    }
}
