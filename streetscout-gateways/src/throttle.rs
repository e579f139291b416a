use std::{fmt, thread, time::Duration};

use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use streetscout_core::gateways::throttle::RequestThrottle;

/// Token bucket that permits one request per interval.
///
/// A single instance is meant to be shared by all requests
/// to the same service.
pub struct IntervalThrottle {
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    clock: DefaultClock,
    interval: Duration,
}

impl IntervalThrottle {
    /// A zero interval disables the limit.
    pub fn new(interval: Duration) -> Self {
        let clock = DefaultClock::default();
        let limiter =
            Quota::with_period(interval).map(|quota| RateLimiter::direct_with_clock(quota, &clock));
        Self {
            limiter,
            clock,
            interval,
        }
    }
}

impl fmt::Debug for IntervalThrottle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("IntervalThrottle")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl RequestThrottle for IntervalThrottle {
    fn until_ready(&self) {
        let Some(limiter) = &self.limiter else {
            return;
        };
        while let Err(not_until) = limiter.check() {
            let wait = not_until.wait_time_from(self.clock.now());
            log::trace!("Waiting {wait:?} for the next request slot");
            thread::sleep(wait);
        }
    }
}
