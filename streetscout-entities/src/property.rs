use crate::{address::Address, geo::MapPoint};

/// An address together with its looked-up position.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProperty {
    pub address         : Address,
    pub pos             : MapPoint,
    pub street_view_url : Option<String>,
}

impl ResolvedProperty {
    pub fn new(address: Address, pos: MapPoint) -> Self {
        Self {
            address,
            pos,
            street_view_url: None,
        }
    }

    pub fn lat(&self) -> f64 {
        self.pos.lat().to_deg()
    }

    pub fn lng(&self) -> f64 {
        self.pos.lng().to_deg()
    }
}
