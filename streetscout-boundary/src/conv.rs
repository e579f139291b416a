use super::*;
use streetscout_entities as e;

impl From<e::property::ResolvedProperty> for ResolvedProperty {
    fn from(from: e::property::ResolvedProperty) -> Self {
        let (lat, lng) = from.pos.to_lat_lng_deg();
        let e::property::ResolvedProperty {
            address,
            street_view_url,
            ..
        } = from;
        Self {
            address: address.into(),
            lat,
            lng,
            street_view_url,
        }
    }
}
