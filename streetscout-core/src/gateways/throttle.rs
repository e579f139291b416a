/// Limits the rate of outbound requests to an external service.
///
/// Implementations are shared by all requests of a process,
/// so concurrent uploads together stay below the service limit.
pub trait RequestThrottle {
    /// Blocks the current thread until the next request is permitted.
    fn until_ready(&self);
}

impl<T> RequestThrottle for &T
where
    T: RequestThrottle + ?Sized,
{
    fn until_ready(&self) {
        (**self).until_ready();
    }
}

/// Does not limit anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

impl RequestThrottle for Unthrottled {
    fn until_ready(&self) {}
}
