use chrono::{DateTime, Local};

use ponto_core::Clock;

/// Real-time clock backed by the system local time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
