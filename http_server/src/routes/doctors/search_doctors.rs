use actix_web::web;
use itertools::Itertools;
use serde::Deserialize;
use use_cases::search_nearby_clinics::NearbySearch;

use crate::errors::ApiError;
use crate::routes::doctors::DoctorResponse;
use crate::use_case_app_container::UseCaseAppContainer;

#[derive(Deserialize, Debug)]
struct SearchRequest {
    lat: Option<String>,
    lng: Option<String>,
    /// Meters.
    radius: Option<String>,
}

/// Blank parameters count as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_number(name: &str, value: &str) -> Result<f64, ApiError> {
    value
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("{name} must be a number, got {value:?}")))
}

impl TryFrom<&SearchRequest> for NearbySearch {
    type Error = ApiError;

    /// Numbers are only parsed once all three are present, otherwise the
    /// search lists everything regardless of what the other parameters hold.
    fn try_from(value: &SearchRequest) -> Result<Self, Self::Error> {
        let lat = present(value.lat.as_deref());
        let lng = present(value.lng.as_deref());
        let radius = present(value.radius.as_deref());

        match (lat, lng, radius) {
            (Some(lat), Some(lng), Some(radius)) => Ok(NearbySearch {
                latitude: Some(parse_number("lat", lat)?),
                longitude: Some(parse_number("lng", lng)?),
                radius_meters: Some(parse_number("radius", radius)?),
            }),
            _ => Ok(NearbySearch::default()),
        }
    }
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn search_doctors(
    data: web::Query<SearchRequest>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<web::Json<Vec<DoctorResponse>>, ApiError> {
    let search = NearbySearch::try_from(&*data)?;
    let locations = app
        .get_client()
        .search_nearby_clinics()
        .search(search)
        .await?;

    Ok(web::Json(locations.into_iter().map_into().collect_vec()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/search").service(web::resource("").route(web::get().to(search_doctors))),
    );
}
