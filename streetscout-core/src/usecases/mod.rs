mod resolve_addresses;
mod street_view_url;

#[cfg(test)]
pub mod tests;

pub use self::{resolve_addresses::*, street_view_url::*};

mod prelude {
    pub use crate::{
        entities::*,
        gateways::{
            geocode::GeoCodingGateway,
            throttle::RequestThrottle,
        },
    };
}
