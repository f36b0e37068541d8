use actix_web::web;
use entities::locations::ClinicLocation;
use serde::Serialize;
use uuid::Uuid;

pub mod register_doctor;
pub mod search_doctors;


/// A GeoJSON point, `coordinates` ordered `[longitude, latitude]`.
#[derive(Serialize, Debug)]
struct PointResponse {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

#[derive(Serialize, Debug)]
pub(crate) struct DoctorResponse {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    address: String,
    location: PointResponse,
}

impl From<ClinicLocation> for DoctorResponse {
    fn from(value: ClinicLocation) -> Self {
        Self {
            id: value.id.inner(),
            name: value.name,
            address: value.address,
            location: PointResponse {
                kind: "Point",
                coordinates: value.coordinate.to_lng_lat(),
            },
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/doctors")
            .configure(register_doctor::init_routes)
            .configure(search_doctors::init_routes),
    );
}
