pub mod google;
pub mod throttle;
