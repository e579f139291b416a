pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use streetscout_entities::{address::*, geo::*, imagery::*, property::*};
}
