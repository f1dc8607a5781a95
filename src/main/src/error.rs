use thiserror::Error;

/// No usable temperature reading this cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not reach WeatherLink: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("WeatherLink returned no outdoor conditions")]
    MissingConditions,
    #[error("WeatherLink returned an invalid temperature {0:?}")]
    InvalidTemperature(Option<f32>),
}

/// A command or message did not get through.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Email was not sent! {0}")]
    Rejected(String),
}

/// Why a single poll cycle failed. None of these are fatal.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("Actuator delivery failed: {0}")]
    Actuator(#[source] DeliveryError),
    #[error("Notification delivery failed: {0}")]
    Notification(#[source] DeliveryError),
}
