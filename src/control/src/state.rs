use core::fmt;
use time::OffsetDateTime;

// Temperature in degrees Fahrenheit
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Temperature(f32);

impl Temperature {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn min(self, other: Temperature) -> Temperature {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl From<Temperature> for f32 {
    fn from(value: Temperature) -> f32 {
        value.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum EpisodeState {
    #[default]
    Idle,
    Active {
        // Fixed at activation
        start: OffsetDateTime,
        // Never increases while the episode lasts
        min_temperature: Temperature,
    },
}

impl EpisodeState {
    pub fn is_active(&self) -> bool {
        matches!(self, EpisodeState::Active { .. })
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ActuatorCommand {
    // Run for this many seconds, then the controller turns itself off
    Run(u32),
    Stop,
}

impl ActuatorCommand {
    // Run duration as understood by the actuator: anything below 1 means stop
    pub fn seconds(&self) -> u32 {
        match self {
            ActuatorCommand::Run(seconds) => *seconds,
            ActuatorCommand::Stop => 0,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Notify(Notification),
    Actuate(ActuatorCommand),
}
