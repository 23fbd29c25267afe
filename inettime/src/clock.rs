use std::time::SystemTime;

/// A source of the current instant.
///
/// `InternetTime::now_with` reads the time through this trait so that callers
/// can substitute a fixed or simulated clock.
pub trait Clock {
    fn instant(&self) -> SystemTime;
}

/// Reads the system realtime clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> SystemTime {
        crate::sys::realtime::now()
    }
}

/// A clock that always returns the same instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: SystemTime,
}

impl FixedClock {
    pub fn new(instant: SystemTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> SystemTime {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn instant(&self) -> SystemTime {
        (**self).instant()
    }
}
