use crate::clinic_locations::DbClinicLocation;
use crate::repository::Repository;
use anyhow::Context;
use entities::locations::{ClinicLocation, NewClinicLocation};

impl Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn insert_location(
        &self,
        location: NewClinicLocation,
    ) -> anyhow::Result<ClinicLocation> {
        let record = sqlx::query_as::<_, DbClinicLocation>(
            "
            INSERT INTO clinic.locations (name, address, location)
            VALUES ($1, $2, ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography)
            RETURNING id, name, address,
                ST_X(location::geometry) AS longitude,
                ST_Y(location::geometry) AS latitude
            ",
        )
        .bind(location.name.as_ref())
        .bind(&location.address)
        .bind(location.coordinate.longitude())
        .bind(location.coordinate.latitude())
        .fetch_one(self.pool())
        .await
        .context("Failed to insert location")?;

        record.try_into()
    }
}
