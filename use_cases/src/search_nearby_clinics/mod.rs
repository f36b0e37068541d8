use crate::errors::ClinicLocationError;
use crate::repositories::LocationStore;
use async_trait::async_trait;
use entities::locations::{ClinicLocation, Coordinate, SearchRadius};
use std::sync::Arc;

/// A patient's search. Each part is optional; a search narrows to a radius
/// only when all three are present.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NearbySearch {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_meters: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchScope {
    Near {
        point: Coordinate,
        radius: SearchRadius,
    },
    // There is no place-name geocoding, so an incomplete search lists everything.
    Everywhere,
}

impl TryFrom<NearbySearch> for SearchScope {
    type Error = ClinicLocationError;

    fn try_from(value: NearbySearch) -> Result<Self, Self::Error> {
        match (value.latitude, value.longitude, value.radius_meters) {
            (Some(latitude), Some(longitude), Some(radius)) => Ok(SearchScope::Near {
                point: Coordinate::new(longitude, latitude)?,
                radius: SearchRadius::meters(radius)?,
            }),
            _ => Ok(SearchScope::Everywhere),
        }
    }
}

#[async_trait]
pub trait SearchNearbyClinicsInteractor: Send + Sync {
    async fn search(
        &self,
        search: NearbySearch,
    ) -> Result<Vec<ClinicLocation>, ClinicLocationError>;
}

pub struct SearchNearbyClinicsInteractorImpl {
    store: Arc<dyn LocationStore>,
}

impl SearchNearbyClinicsInteractorImpl {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SearchNearbyClinicsInteractor for SearchNearbyClinicsInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn search(
        &self,
        search: NearbySearch,
    ) -> Result<Vec<ClinicLocation>, ClinicLocationError> {
        let locations = match SearchScope::try_from(search)? {
            SearchScope::Near { point, radius } => self.store.find_near(point, radius).await?,
            SearchScope::Everywhere => {
                tracing::info!("Incomplete search point, listing every clinic");
                self.store.find_all().await?
            }
        };
        Ok(locations)
    }
}
