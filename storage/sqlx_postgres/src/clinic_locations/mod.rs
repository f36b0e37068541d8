use crate::repository::Repository;
use anyhow::Context;
use async_trait::async_trait;
use entities::locations::{ClinicLocation, Coordinate, NewClinicLocation, SearchRadius};
use use_cases::LocationStore;
use uuid::Uuid;

mod find_locations_near;
mod insert_location;
mod list_locations;

/// Every query projects the geography column back into a longitude-first pair.
#[derive(sqlx::FromRow, Debug)]
pub(crate) struct DbClinicLocation {
    id: Uuid,
    name: String,
    address: String,
    longitude: f64,
    latitude: f64,
}

impl TryFrom<DbClinicLocation> for ClinicLocation {
    type Error = anyhow::Error;

    fn try_from(value: DbClinicLocation) -> Result<Self, Self::Error> {
        let coordinate = Coordinate::new(value.longitude, value.latitude)
            .with_context(|| format!("Stored location {} has an invalid coordinate", value.id))?;
        Ok(ClinicLocation {
            id: value.id.into(),
            name: value.name,
            address: value.address,
            coordinate,
        })
    }
}

#[async_trait]
impl LocationStore for Repository {
    async fn insert(&self, location: NewClinicLocation) -> anyhow::Result<ClinicLocation> {
        self.insert_location(location).await
    }

    async fn find_near(
        &self,
        point: Coordinate,
        radius: SearchRadius,
    ) -> anyhow::Result<Vec<ClinicLocation>> {
        self.find_locations_near(point, radius).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ClinicLocation>> {
        self.list_locations().await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::Repository;
    use entities::locations::{
        ClinicName, Coordinate, NewClinicLocation, SearchRadius, EARTH_RADIUS_METERS,
    };
    use use_cases::LocationStore;

    fn bengaluru() -> Coordinate {
        Coordinate::new(77.5946, 12.9716).unwrap()
    }

    fn north_of(origin: &Coordinate, meters: f64) -> Coordinate {
        let delta = (meters / EARTH_RADIUS_METERS).to_degrees();
        Coordinate::new(origin.longitude(), origin.latitude() + delta).unwrap()
    }

    fn clinic(name: &str, coordinate: Coordinate) -> NewClinicLocation {
        NewClinicLocation {
            name: ClinicName::parse(name.to_string()).unwrap(),
            address: "Bengaluru, Karnataka".to_string(),
            coordinate,
        }
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn test_inserted_location_is_returned_longitude_first() {
        let repository = Repository::new_test_repo().await;

        let inserted = repository
            .insert(clinic("Apollo Clinic", bengaluru()))
            .await
            .unwrap();

        assert_eq!(inserted.name, "Apollo Clinic");
        assert_eq!(inserted.address, "Bengaluru, Karnataka");
        assert_eq!(inserted.coordinate.to_lng_lat(), [77.5946, 12.9716]);

        let found = repository
            .find_near(bengaluru(), SearchRadius::meters(100.0).unwrap())
            .await
            .unwrap();
        assert_eq!(found, vec![inserted]);
    }

    #[tokio::test]
    #[ignore = "requires a PostGIS database"]
    async fn test_searching_for_locations_near_a_point() {
        let repository = Repository::new_test_repo().await;
        let origin = bengaluru();
        repository
            .insert(clinic("ten km", north_of(&origin, 10_000.0)))
            .await
            .unwrap();
        repository
            .insert(clinic("one km", north_of(&origin, 1_000.0)))
            .await
            .unwrap();

        let within_five = repository
            .find_near(origin, SearchRadius::meters(5_000.0).unwrap())
            .await
            .unwrap();
        let names = within_five.iter().map(|l| l.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["one km"]);

        let within_fifteen = repository
            .find_near(origin, SearchRadius::meters(15_000.0).unwrap())
            .await
            .unwrap();
        let names = within_fifteen
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["one km", "ten km"]);

        assert_eq!(repository.find_all().await.unwrap().len(), 2);
    }
}
