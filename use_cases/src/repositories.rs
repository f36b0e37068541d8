use async_trait::async_trait;
use entities::locations::{ClinicLocation, Coordinate, NewClinicLocation, SearchRadius};

/// Persistence for clinic locations. Implementations keep a spatial index over
/// the coordinate so an insert is visible to the next `find_near` without any
/// reindexing by the caller.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn insert(&self, location: NewClinicLocation) -> anyhow::Result<ClinicLocation>;

    /// Locations within `radius` geodesic meters of `point`, nearest first.
    async fn find_near(
        &self,
        point: Coordinate,
        radius: SearchRadius,
    ) -> anyhow::Result<Vec<ClinicLocation>>;

    /// Every location, in no particular order.
    async fn find_all(&self) -> anyhow::Result<Vec<ClinicLocation>>;
}
