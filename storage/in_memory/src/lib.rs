//! A [`LocationStore`] held entirely in memory.
//!
//! Locations are indexed in an R-tree keyed on `[longitude, latitude]`. A
//! proximity query first collects the candidates inside the geodesic bounding
//! box of the search circle, then keeps those whose haversine distance is within
//! the radius. Searches whose circle covers a pole or crosses the antimeridian
//! cannot be expressed as a single box and scan the whole tree instead.

use anyhow::anyhow;
use async_trait::async_trait;
use entities::locations::{
    ClinicLocation, ClinicLocationId, Coordinate, NewClinicLocation, SearchRadius,
    EARTH_RADIUS_METERS,
};
use itertools::Itertools;
use rstar::{RTree, RTreeObject, AABB};
use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::RwLock;
use use_cases::LocationStore;

/// Slack in degrees added around the search box to absorb rounding.
const ENVELOPE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug)]
struct IndexedLocation {
    position: [f64; 2],
    location: ClinicLocation,
}

impl From<ClinicLocation> for IndexedLocation {
    fn from(location: ClinicLocation) -> Self {
        Self {
            position: location.coordinate.to_lng_lat(),
            location,
        }
    }
}

impl RTreeObject for IndexedLocation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

#[derive(Default)]
pub struct InMemoryLocationStore {
    index: RwLock<RTree<IndexedLocation>>,
}

impl InMemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bounding box of every point within `radius` of `point`, or `None` when the
/// circle reaches a pole or wraps around the antimeridian.
fn search_envelope(point: &Coordinate, radius: SearchRadius) -> Option<AABB<[f64; 2]>> {
    let angular_radius = radius.inner() / EARTH_RADIUS_METERS;
    let latitude = point.latitude().to_radians();
    let longitude = point.longitude().to_radians();

    let min_latitude = latitude - angular_radius;
    let max_latitude = latitude + angular_radius;
    if min_latitude <= -FRAC_PI_2 || max_latitude >= FRAC_PI_2 {
        return None;
    }

    let longitude_delta = (angular_radius.sin() / latitude.cos()).asin();
    let min_longitude = longitude - longitude_delta;
    let max_longitude = longitude + longitude_delta;
    if min_longitude < -PI || max_longitude > PI {
        return None;
    }

    Some(AABB::from_corners(
        [
            min_longitude.to_degrees() - ENVELOPE_TOLERANCE,
            min_latitude.to_degrees() - ENVELOPE_TOLERANCE,
        ],
        [
            max_longitude.to_degrees() + ENVELOPE_TOLERANCE,
            max_latitude.to_degrees() + ENVELOPE_TOLERANCE,
        ],
    ))
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    #[tracing::instrument(err, skip(self), level = "debug")]
    async fn insert(&self, location: NewClinicLocation) -> anyhow::Result<ClinicLocation> {
        let location = ClinicLocation::from_new(ClinicLocationId::new(), location);
        self.index
            .write()
            .map_err(|_| anyhow!("Location index lock was poisoned"))?
            .insert(location.clone().into());
        Ok(location)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    async fn find_near(
        &self,
        point: Coordinate,
        radius: SearchRadius,
    ) -> anyhow::Result<Vec<ClinicLocation>> {
        let index = self
            .index
            .read()
            .map_err(|_| anyhow!("Location index lock was poisoned"))?;

        let candidates: Box<dyn Iterator<Item = &IndexedLocation> + '_> =
            match search_envelope(&point, radius) {
                Some(envelope) => Box::new(index.locate_in_envelope_intersecting(&envelope)),
                None => Box::new(index.iter()),
            };

        let locations = candidates
            .map(|candidate| {
                let distance = point.distance_meters(&candidate.location.coordinate);
                (distance, candidate)
            })
            .filter(|(distance, _)| *distance <= radius.inner())
            .sorted_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, candidate)| candidate.location.clone())
            .collect_vec();

        Ok(locations)
    }

    #[tracing::instrument(err, skip(self), level = "debug")]
    async fn find_all(&self) -> anyhow::Result<Vec<ClinicLocation>> {
        let index = self
            .index
            .read()
            .map_err(|_| anyhow!("Location index lock was poisoned"))?;
        Ok(index
            .iter()
            .map(|indexed| indexed.location.clone())
            .collect_vec())
    }
}
