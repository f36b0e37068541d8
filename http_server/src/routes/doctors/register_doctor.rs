use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use use_cases::register_clinic_location::ClinicRegistration;

use crate::errors::ApiError;
use crate::routes::doctors::DoctorResponse;
use crate::use_case_app_container::UseCaseAppContainer;

const REGISTERED_MESSAGE: &str = "Doctor clinic added successfully";

/// `lat` and `lng` may be sent as JSON numbers or numeric strings.
#[derive(Deserialize, Debug)]
struct RegisterDoctorRequest {
    name: String,
    address: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    lat: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    lng: f64,
}

impl From<RegisterDoctorRequest> for ClinicRegistration {
    fn from(value: RegisterDoctorRequest) -> Self {
        Self {
            name: value.name,
            address: value.address,
            latitude: value.lat,
            longitude: value.lng,
        }
    }
}

#[derive(Serialize)]
struct RegisterDoctorResponse {
    message: &'static str,
    doctor: DoctorResponse,
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn register_doctor(
    data: web::Json<RegisterDoctorRequest>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let location = app
        .get_client()
        .register_clinic_location()
        .register(data.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(RegisterDoctorResponse {
        message: REGISTERED_MESSAGE,
        doctor: location.into(),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(register_doctor)));
}
