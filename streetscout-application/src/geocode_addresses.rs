use std::io;

use super::*;
use crate::prelude::read_address_rows;
use crate::{
    gateways::{geocode::GeoCodingGateway, throttle::RequestThrottle},
    usecases::{Resolution, StreetViewApi},
};

/// Everything the geocoding flow needs besides its input.
#[derive(Debug, Clone, Default)]
pub struct GeocodingSettings {
    pub street_view: StreetViewApi,
    pub frame: ImageryFrame,
}

/// Reads the address list from a CSV file, resolves each address and
/// attaches a street view URL to every resolved property.
///
/// A file that cannot be read is reported as an error before any
/// address has been sent to the geocoding service.
pub fn geocode_csv<G, T, R>(
    gateway: &G,
    throttle: &T,
    settings: &GeocodingSettings,
    reader: R,
) -> Result<Resolution>
where
    G: GeoCodingGateway + ?Sized,
    T: RequestThrottle + ?Sized,
    R: io::Read,
{
    let rows = read_address_rows(reader)?;
    Ok(geocode_rows(gateway, throttle, settings, rows))
}

pub fn geocode_rows<G, T>(
    gateway: &G,
    throttle: &T,
    settings: &GeocodingSettings,
    rows: Vec<AddressRow>,
) -> Resolution
where
    G: GeoCodingGateway + ?Sized,
    T: RequestThrottle + ?Sized,
{
    let mut resolution = usecases::resolve_addresses(gateway, throttle, rows);
    usecases::attach_street_view_urls(
        &settings.street_view,
        &settings.frame,
        &mut resolution.properties,
    );
    resolution
}
