/// Wall-clock source for record timestamps.
pub trait Clock {
    /// Seconds since the Unix epoch.
    fn now(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> u64 {
        (**self).now()
    }
}
