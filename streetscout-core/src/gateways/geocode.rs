use std::{convert::Infallible, fmt, str::FromStr};

use streetscout_entities::{address::Address, geo::MapPoint};
use thiserror::Error;

pub trait GeoCodingGateway {
    /// Looks up the position of the first candidate
    /// the service returns for the given address.
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<MapPoint, Error>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<MapPoint, Error> {
        (**self).resolve_address_lat_lng(addr)
    }
}

/// The `status` field of a geocoding response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    ZeroResults,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding service responded with status {0}")]
    Status(Status),
    #[error("Geocoding service responded with HTTP status {0}")]
    HttpStatus(u16),
    #[error("Geocoding request failed: {0}")]
    Transport(String),
    #[error("Invalid geocoding response: {0}")]
    Response(String),
    #[error("Geocoding service returned no candidates")]
    NoCandidates,
    #[error("Geocoding service returned an invalid position")]
    InvalidPosition,
}

impl Error {
    /// The service answered but did not find the address.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::Status(Status::ZeroResults) | Self::NoCandidates)
    }
}
