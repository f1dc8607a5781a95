//! Boundary between the poll cycle and the outside world.
//!
//! The cycle only talks to these traits, so it can be driven by the HTTP
//! adapters in production and by recording fakes in tests.

use time::OffsetDateTime;

use control::Temperature;

use crate::error::{DeliveryError, FetchError};

pub trait WeatherSource {
    /// Current outdoor temperature.
    fn fetch_temperature(&mut self) -> Result<Temperature, FetchError>;
}

pub trait Actuator {
    /// Run for `seconds`, or stop straight away when `seconds` is below 1.
    fn set_run_duration(&mut self, seconds: u32) -> Result<(), DeliveryError>;
}

pub trait Notifier {
    fn notify(&mut self, subject: &str, body: &str) -> Result<(), DeliveryError>;
}

pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        // The local offset is unavailable once other threads are running on
        // some platforms
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}
