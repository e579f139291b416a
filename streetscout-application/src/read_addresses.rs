use std::io;

use super::*;
use crate::error::AppError;

pub const ADDRESS_COLUMN: &str = "address";

/// Reads all rows of a CSV file with an `address` column.
///
/// The whole input is parsed before anything is returned, so a
/// broken file is rejected before any address is looked up.
/// Other columns are ignored and a row that ends before the
/// address column has no address.
pub fn read_address_rows<R: io::Read>(reader: R) -> Result<Vec<AddressRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let idx = rdr
        .headers()?
        .iter()
        .position(|h| h == ADDRESS_COLUMN)
        .ok_or(AppError::MissingColumn(ADDRESS_COLUMN))?;
    let rows = rdr
        .records()
        .map(|r| {
            r.map(|record| AddressRow {
                address: record.get(idx).map(Address::from),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Read {} address rows", rows.len());
    Ok(rows)
}
