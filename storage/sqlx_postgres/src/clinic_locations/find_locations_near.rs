use crate::clinic_locations::DbClinicLocation;
use crate::repository::Repository;
use anyhow::Context;
use entities::locations::{ClinicLocation, Coordinate, SearchRadius};

impl Repository {
    /// `ST_DWithin` on `geography` measures on the spheroid and is served by
    /// the GiST index on `location`.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn find_locations_near(
        &self,
        point: Coordinate,
        radius: SearchRadius,
    ) -> anyhow::Result<Vec<ClinicLocation>> {
        let records = sqlx::query_as::<_, DbClinicLocation>(
            "
            SELECT id, name, address,
                ST_X(location::geometry) AS longitude,
                ST_Y(location::geometry) AS latitude
            FROM clinic.locations
            WHERE ST_DWithin(
                location,
                ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography,
                $3
            )
            ORDER BY ST_Distance(
                location,
                ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography
            ), id
            ",
        )
        .bind(point.longitude())
        .bind(point.latitude())
        .bind(radius.inner())
        .fetch_all(self.pool())
        .await
        .context("Failed to search for locations")?;

        records
            .into_iter()
            .map(ClinicLocation::try_from)
            .collect::<anyhow::Result<Vec<_>>>()
    }
}
