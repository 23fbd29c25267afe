use core::time::Duration;
use std::time::SystemTime;

pub mod realtime {
    use super::*;

    use winapi::shared::minwindef::FILETIME;

    const NANOS_PER_INTERVAL: u64 = 100;

    // 100ns intervals between 1601-01-01 and 1970-01-01
    const UNIX_EPOCH_INTERVALS: u64 = 116_444_736 * 1_000_000_000;

    fn filetime_intervals() -> u64 {
        unsafe {
            let mut ft: FILETIME = core::mem::zeroed();
            winapi::um::sysinfoapi::GetSystemTimePreciseAsFileTime(&mut ft);
            (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
        }
    }

    pub fn now() -> SystemTime {
        let intervals = filetime_intervals().saturating_sub(UNIX_EPOCH_INTERVALS);
        SystemTime::UNIX_EPOCH + Duration::from_nanos(intervals * NANOS_PER_INTERVAL)
    }
}
