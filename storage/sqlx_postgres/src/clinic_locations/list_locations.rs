use crate::clinic_locations::DbClinicLocation;
use crate::repository::Repository;
use anyhow::Context;
use entities::locations::ClinicLocation;

impl Repository {
    #[tracing::instrument(err, skip(self), level = "info")]
    pub(crate) async fn list_locations(&self) -> anyhow::Result<Vec<ClinicLocation>> {
        let records = sqlx::query_as::<_, DbClinicLocation>(
            "
            SELECT id, name, address,
                ST_X(location::geometry) AS longitude,
                ST_Y(location::geometry) AS latitude
            FROM clinic.locations
            ",
        )
        .fetch_all(self.pool())
        .await
        .context("Failed to list locations")?;

        records
            .into_iter()
            .map(ClinicLocation::try_from)
            .collect::<anyhow::Result<Vec<_>>>()
    }
}
