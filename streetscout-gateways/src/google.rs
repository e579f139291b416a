use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;
use streetscout_core::{
    entities::{Address, MapPoint},
    gateways::geocode::{Error, GeoCodingGateway, Status},
};

pub const DEFAULT_GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Forward geocoding with the Google Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleGeocoding {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleGeocoding {
    /// Must not be called from within an async context.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

impl GeoCodingGateway for GoogleGeocoding {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<MapPoint, Error> {
        let mut req = self
            .client
            .get(&self.api_url)
            .query(&[("address", addr.as_str())]);
        if let Some(key) = &self.api_key {
            req = req.query(&[("key", key)]);
        }
        let res = req.send().map_err(|err| Error::Transport(err.to_string()))?;
        if res.status() != StatusCode::OK {
            return Err(Error::HttpStatus(res.status().as_u16()));
        }
        let body = res
            .text()
            .map_err(|err| Error::Transport(err.to_string()))?;
        first_position(&body)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

fn first_position(body: &str) -> Result<MapPoint, Error> {
    let res: GeocodeResponse =
        serde_json::from_str(body).map_err(|err| Error::Response(err.to_string()))?;
    let status = Status::from(res.status.as_str());
    if status != Status::Ok {
        if let Some(msg) = &res.error_message {
            log::debug!("Geocoding service error message: {msg}");
        }
        return Err(Error::Status(status));
    }
    let Location { lat, lng } = res
        .results
        .into_iter()
        .next()
        .map(|r| r.geometry.location)
        .ok_or(Error::NoCandidates)?;
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)
}
