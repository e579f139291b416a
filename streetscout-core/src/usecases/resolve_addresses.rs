use super::prelude::*;

/// Outcome of resolving a list of address rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Successfully resolved rows in input order.
    pub properties: Vec<ResolvedProperty>,
    /// Rows without an address.
    pub skipped: usize,
    /// Rows the geocoding service could not resolve.
    pub failed: usize,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Resolves the position of each address sequentially.
///
/// Rows without an address are skipped without contacting the
/// service. Rows that fail to resolve are logged and dropped;
/// a single failing row never aborts the whole batch.
pub fn resolve_addresses<G, T, I>(gateway: &G, throttle: &T, rows: I) -> Resolution
where
    G: GeoCodingGateway + ?Sized,
    T: RequestThrottle + ?Sized,
    I: IntoIterator<Item = AddressRow>,
{
    let mut resolution = Resolution::default();
    for row in rows {
        let address = match row.address {
            Some(address) if !address.is_empty() => address,
            _ => {
                resolution.skipped += 1;
                continue;
            }
        };
        throttle.until_ready();
        match gateway.resolve_address_lat_lng(&address) {
            Ok(pos) => {
                log::debug!("Resolved address location '{address}': {pos}");
                resolution
                    .properties
                    .push(ResolvedProperty::new(address, pos));
            }
            Err(err) => {
                if err.is_no_match() {
                    log::info!("Geocoding failed for address '{address}': {err}");
                } else {
                    log::warn!("Geocoding failed for address '{address}': {err}");
                }
                resolution.failed += 1;
            }
        }
    }
    log::info!(
        "Resolved {} addresses ({} failed, {} skipped)",
        resolution.properties.len(),
        resolution.failed,
        resolution.skipped
    );
    resolution
}
