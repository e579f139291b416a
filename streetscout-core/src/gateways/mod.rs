pub mod geocode;
pub mod throttle;
