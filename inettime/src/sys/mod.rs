#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

#[cfg(not(any(unix, windows)))]
pub mod realtime {
    use std::time::SystemTime;

    pub fn now() -> SystemTime {
        SystemTime::now()
    }
}
