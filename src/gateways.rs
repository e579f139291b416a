use anyhow::Result;
use streetscout_core::usecases::StreetViewApi;
use streetscout_gateways::{google::GoogleGeocoding, throttle::IntervalThrottle};

use crate::config::{Config, GeocodingGateway};

pub fn geocoding_gateway(cfg: &Config) -> Result<GoogleGeocoding> {
    let GeocodingGateway::Google { api_url, api_key } = &cfg.geocoding.gateway;
    if api_key.is_none() {
        log::warn!("No Google API key found");
    }
    let gw = GoogleGeocoding::new(
        api_url.clone(),
        api_key.clone(),
        Some(cfg.geocoding.request_timeout),
    )?;
    Ok(gw)
}

/// One throttle for all geocoding requests of the process.
pub fn request_throttle(cfg: &Config) -> IntervalThrottle {
    let interval = cfg.geocoding.min_request_interval;
    log::debug!("Limit geocoding requests to one per {interval:?}");
    IntervalThrottle::new(interval)
}

pub fn street_view_api(cfg: &Config) -> StreetViewApi {
    StreetViewApi {
        base_url: cfg.street_view.api_url.clone(),
        api_key: cfg.google_api_key().map(ToString::to_string),
    }
}
