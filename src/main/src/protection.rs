use log::*;

use control::{Command, EpisodeState, FrostStateMachine};

use crate::error::CycleError;
use crate::ports::{Actuator, Clock, Notifier, WeatherSource};

/// One poll cycle: fetch, evaluate, then carry out whatever was decided.
pub struct FrostProtection<W, A, N, C> {
    machine: FrostStateMachine,
    weather: W,
    actuator: A,
    notifier: N,
    clock: C,
}

impl<W, A, N, C> FrostProtection<W, A, N, C>
where
    W: WeatherSource,
    A: Actuator,
    N: Notifier,
    C: Clock,
{
    pub fn new(machine: FrostStateMachine, weather: W, actuator: A, notifier: N, clock: C) -> Self {
        FrostProtection {
            machine,
            weather,
            actuator,
            notifier,
            clock,
        }
    }

    pub fn state(&self) -> EpisodeState {
        self.machine.state()
    }

    pub fn run_cycle(&mut self) -> Result<(), CycleError> {
        let temperature = self.weather.fetch_temperature()?;
        info!("Temperature: {}", temperature);

        let was_active = self.state().is_active();
        let commands = self.machine.step(temperature, self.clock.now());
        match (was_active, self.state().is_active()) {
            (false, true) => info!("Turning on."),
            (true, false) => info!("Turning off."),
            _ => {}
        }

        self.execute(commands)
    }

    // Every command gets attempted even when an earlier one fails: a lost
    // email must never keep the sprinkler from being started or stopped.
    fn execute(&mut self, commands: Vec<Command>) -> Result<(), CycleError> {
        let mut first_error = None;

        for command in commands {
            let result = match &command {
                Command::Notify(notification) => self
                    .notifier
                    .notify(&notification.subject, &notification.body)
                    .map_err(CycleError::Notification),
                Command::Actuate(actuation) => self
                    .actuator
                    .set_run_duration(actuation.seconds())
                    .map_err(CycleError::Actuator),
            };

            if let Err(err) = result {
                if first_error.is_none() {
                    first_error = Some(err);
                } else {
                    error!("{}", err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
