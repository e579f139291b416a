use std::{fmt::Display, result};

use rocket::{
    self,
    data::{ByteUnit, Data},
    get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route, State,
};
use streetscout_boundary::{self as json, Error as JsonErrorResponse};
use streetscout_core::usecases::Resolution;

use super::{geocode_upload, guards::*, Cfg};

mod error;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![get_api_key_status, post_geocode]
}

#[get("/api-key-status")]
pub fn get_api_key_status(cfg: &State<Cfg>) -> Json<json::ApiKeyStatus> {
    Json(json::ApiKeyStatus::new(cfg.api_key_configured()))
}

/// Geocodes the CSV file sent as request body.
#[post("/api/geocode", data = "<data>")]
pub async fn post_geocode(
    cfg: &State<Cfg>,
    geocoding: &State<GeoCoding>,
    throttle: &State<Throttle>,
    data: Data<'_>,
) -> Result<json::GeocodingResult> {
    let body = data.open(ByteUnit::from(cfg.upload_limit)).into_bytes().await?;
    if !body.is_complete() {
        return Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("The file exceeds the upload limit"),
            Status::PayloadTooLarge,
        ));
    }
    let resolution = geocode_upload(cfg, geocoding, throttle, body.into_inner()).await?;
    Ok(Json(geocoding_result(resolution)))
}

pub(crate) fn geocoding_result(resolution: Resolution) -> json::GeocodingResult {
    let Resolution {
        properties,
        skipped,
        failed,
    } = resolution;
    json::GeocodingResult {
        count: properties.len(),
        skipped,
        failed,
        properties: properties.into_iter().map(Into::into).collect(),
    }
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
