use core::ops::Deref;
use std::sync::Arc;

use streetscout_core::gateways::{geocode::GeoCodingGateway, throttle::RequestThrottle};

pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

impl Deref for GeoCoding {
    type Target = dyn GeoCodingGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Request budget shared by all uploads.
pub struct Throttle(pub Arc<dyn RequestThrottle + Send + Sync>);

impl Deref for Throttle {
    type Target = dyn RequestThrottle;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
