use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{net::IpAddr, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("streetscout.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
    pub street_view: Option<StreetView>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    /// MiB
    pub upload_limit: u64,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub api_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub min_request_interval: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Google,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StreetView {
    pub api_url: String,
    pub width: u32,
    pub height: u32,
    pub heading: f64,
    pub pitch: f64,
    pub fov: f64,
}

impl Default for StreetView {
    fn default() -> Self {
        Config::default()
            .street_view
            .expect("Street view configuration")
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google: Option<Google>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_key: Option<String>,
}
