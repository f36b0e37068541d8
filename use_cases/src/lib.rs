use crate::register_clinic_location::{
    RegisterClinicLocationInteractor, RegisterClinicLocationInteractorImpl,
};
use crate::search_nearby_clinics::{SearchNearbyClinicsInteractor, SearchNearbyClinicsInteractorImpl};
use std::sync::Arc;

pub mod errors;
pub mod register_clinic_location;
pub mod repositories;
pub mod search_nearby_clinics;

pub use repositories::LocationStore;

pub trait App: Send + Sync {
    fn register_clinic_location(&self) -> &dyn RegisterClinicLocationInteractor;
    fn search_nearby_clinics(&self) -> &dyn SearchNearbyClinicsInteractor;
}

pub struct AppImpl {
    register_clinic_location: Arc<dyn RegisterClinicLocationInteractor>,
    search_nearby_clinics: Arc<dyn SearchNearbyClinicsInteractor>,
}

impl App for AppImpl {
    fn register_clinic_location(&self) -> &dyn RegisterClinicLocationInteractor {
        self.register_clinic_location.as_ref()
    }

    fn search_nearby_clinics(&self) -> &dyn SearchNearbyClinicsInteractor {
        self.search_nearby_clinics.as_ref()
    }
}

impl AppImpl {
    pub fn new<S: LocationStore + 'static>(store: S) -> Self {
        let store: Arc<dyn LocationStore> = Arc::new(store);

        Self {
            register_clinic_location: Arc::new(RegisterClinicLocationInteractorImpl::new(
                store.clone(),
            )),
            search_nearby_clinics: Arc::new(SearchNearbyClinicsInteractorImpl::new(store)),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_store;
