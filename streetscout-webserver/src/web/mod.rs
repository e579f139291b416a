use std::{net::IpAddr, sync::Arc};

use rocket::{
    config::Config as RocketCfg,
    data::{ByteUnit, Limits},
    tokio::task,
    Rocket, Route,
};
use streetscout_application::{error::AppError, prelude as flows};
use streetscout_core::{
    gateways::{geocode::GeoCodingGateway, throttle::RequestThrottle},
    usecases::Resolution,
};

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub geocoding: flows::GeocodingSettings,
    /// Maximum size of an uploaded file in bytes.
    pub upload_limit: u64,
}

impl Cfg {
    pub fn api_key_configured(&self) -> bool {
        self.geocoding.street_view.api_key.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ServerCfg {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    throttle: Arc<dyn RequestThrottle + Send + Sync>,
}

fn upload_limits(limit: u64) -> Limits {
    let limit = ByteUnit::from(limit);
    Limits::default()
        .limit("file", limit)
        .limit("data-form", limit)
        .limit("bytes", limit)
}

/// Runs the blocking geocoding flow on a worker thread
/// of the async runtime.
pub(crate) async fn geocode_upload(
    cfg: &Cfg,
    geocoding: &guards::GeoCoding,
    throttle: &guards::Throttle,
    data: Vec<u8>,
) -> Result<Resolution, AppError> {
    let gateway = Arc::clone(&geocoding.0);
    let throttle = Arc::clone(&throttle.0);
    let settings = cfg.geocoding.clone();
    task::spawn_blocking(move || flows::geocode_csv(&*gateway, &*throttle, &settings, &data[..]))
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways {
        geocoding,
        throttle,
    } = gateways;

    if !cfg.api_key_configured() {
        warn!("No Google API key configured");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);
    let throttle = guards::Throttle(throttle);

    let mut instance = r.manage(geo_gw).manage(throttle).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes()), ("/", frontend::routes())]
}

/// The secret key for signed cookies is taken from
/// the `ROCKET_SECRET_KEY` environment variable.
fn rocket_cfg(cfg: &Cfg, server: &ServerCfg) -> Result<RocketCfg, rocket::figment::Error> {
    RocketCfg::figment()
        .merge((RocketCfg::ADDRESS, server.address))
        .merge((RocketCfg::PORT, server.port))
        .merge((RocketCfg::LIMITS, upload_limits(cfg.upload_limit)))
        .extract()
}

pub async fn run(
    cfg: Cfg,
    server: ServerCfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    throttle: Arc<dyn RequestThrottle + Send + Sync>,
) {
    let rocket_cfg = match rocket_cfg(&cfg, &server) {
        Ok(rocket_cfg) => rocket_cfg,
        Err(err) => {
            error!("Invalid web server configuration: {err}");
            return;
        }
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let gateways = Gateways {
        geocoding,
        throttle,
    };

    let instance = rocket_instance(options, gateways);
    let server_task = if server.enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Unable to enable CORS: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
