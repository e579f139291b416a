#[macro_use]
extern crate log;

use std::sync::Arc;

use streetscout_core::gateways::{geocode::GeoCodingGateway, throttle::RequestThrottle};

mod web;

pub use web::{Cfg, ServerCfg};

pub async fn run(
    cfg: Cfg,
    server: ServerCfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    throttle: Arc<dyn RequestThrottle + Send + Sync>,
) {
    web::run(cfg, server, geocoding, throttle).await;
}
