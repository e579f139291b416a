#[macro_use]
extern crate log;

mod geocode_addresses;
mod read_addresses;

pub mod prelude {
    pub use super::{geocode_addresses::*, read_addresses::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use streetscout_core::{entities::*, gateways, usecases};
