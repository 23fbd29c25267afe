use core::time::Duration;
use std::time::SystemTime;

fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    unsafe {
        libc::clock_gettime(clock, &mut ts);
    }

    ts
}

pub mod realtime {
    use super::*;

    pub fn now() -> SystemTime {
        let ts = read_clock(libc::CLOCK_REALTIME);

        let nanos = Duration::from_nanos(ts.tv_nsec as u64);

        if ts.tv_sec >= 0 {
            SystemTime::UNIX_EPOCH + Duration::from_secs(ts.tv_sec as u64) + nanos
        } else {
            SystemTime::UNIX_EPOCH - Duration::from_secs(ts.tv_sec.unsigned_abs() as u64) + nanos
        }
    }
}
