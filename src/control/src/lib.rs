mod config;
pub mod report;
mod state;

pub use config::CoreConfig;
pub use state::{ActuatorCommand, Command, EpisodeState, Notification, Temperature};

use time::OffsetDateTime;

/// Decide what to do with a new temperature reading.
///
/// Activation, tracking of the episode minimum, and deactivation are applied
/// in that order. The returned commands are meant to be executed in order.
pub fn evaluate(
    config: &CoreConfig,
    state: EpisodeState,
    reading: Temperature,
    now: OffsetDateTime,
) -> (EpisodeState, Vec<Command>) {
    let mut commands = Vec::new();
    let mut state = state;

    if state == EpisodeState::Idle && reading <= config.activate_below() {
        state = EpisodeState::Active {
            start: now,
            min_temperature: reading,
        };
        commands.push(Command::Notify(report::activated(now)));
        commands.push(Command::Actuate(ActuatorCommand::Run(
            config.safety_ceiling(),
        )));
    }

    if let EpisodeState::Active {
        start,
        min_temperature,
    } = state
    {
        let min_temperature = min_temperature.min(reading);

        if reading >= config.deactivate_at_or_above() {
            commands.push(Command::Notify(report::deactivated(
                now,
                start,
                min_temperature,
            )));
            commands.push(Command::Actuate(ActuatorCommand::Stop));
            return (EpisodeState::Idle, commands);
        }

        state = EpisodeState::Active {
            start,
            min_temperature,
        };
    }

    (state, commands)
}

/// Owns the episode state between polls.
///
/// Nothing is persisted: a new machine always starts out idle, so an episode
/// in progress when the process stops is forgotten and the actuator is left
/// to the safety ceiling.
#[derive(Debug)]
pub struct FrostStateMachine {
    config: CoreConfig,
    state: EpisodeState,
}

impl FrostStateMachine {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            state: EpisodeState::Idle,
        }
    }

    pub fn state(&self) -> EpisodeState {
        self.state
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn step(&mut self, reading: Temperature, now: OffsetDateTime) -> Vec<Command> {
        let (next_state, commands) = evaluate(&self.config, self.state, reading, now);
        self.state = next_state;
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::Duration;

    fn settings() -> CoreConfig {
        CoreConfig::new(Temperature::new(57.0), Temperature::new(58.0), 8 * 3600)
            .expect("valid config")
    }

    fn min_temperature(state: EpisodeState) -> Option<Temperature> {
        match state {
            EpisodeState::Active {
                min_temperature, ..
            } => Some(min_temperature),
            EpisodeState::Idle => None,
        }
    }

    #[test]
    fn test_warm_reading_stays_idle() {
        let (state, commands) = evaluate(
            &settings(),
            EpisodeState::Idle,
            Temperature::new(60.0),
            datetime!(2024-01-17 00:00 UTC),
        );
        assert_eq!(state, EpisodeState::Idle);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_cold_reading_activates() {
        let now = datetime!(2024-01-17 02:00 UTC);
        let (state, commands) =
            evaluate(&settings(), EpisodeState::Idle, Temperature::new(56.0), now);

        assert_eq!(
            state,
            EpisodeState::Active {
                start: now,
                min_temperature: Temperature::new(56.0),
            }
        );
        assert_eq!(
            commands,
            vec![
                Command::Notify(report::activated(now)),
                Command::Actuate(ActuatorCommand::Run(28_800)),
            ]
        );
    }

    #[test]
    fn test_activation_threshold_is_inclusive() {
        let (state, commands) = evaluate(
            &settings(),
            EpisodeState::Idle,
            Temperature::new(57.0),
            datetime!(2024-01-17 02:00 UTC),
        );
        assert!(state.is_active());
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_just_above_activation_threshold_stays_idle() {
        let (state, commands) = evaluate(
            &settings(),
            EpisodeState::Idle,
            Temperature::new(57.1),
            datetime!(2024-01-17 02:00 UTC),
        );
        assert_eq!(state, EpisodeState::Idle);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_colder_reading_tracks_minimum() {
        let start = datetime!(2024-01-17 02:00 UTC);
        let active = EpisodeState::Active {
            start,
            min_temperature: Temperature::new(56.0),
        };
        let (state, commands) = evaluate(
            &settings(),
            active,
            Temperature::new(55.0),
            datetime!(2024-01-17 02:01 UTC),
        );
        assert_eq!(
            state,
            EpisodeState::Active {
                start,
                min_temperature: Temperature::new(55.0),
            }
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_warmer_reading_keeps_minimum() {
        let start = datetime!(2024-01-17 02:00 UTC);
        let active = EpisodeState::Active {
            start,
            min_temperature: Temperature::new(55.0),
        };
        let (state, commands) = evaluate(
            &settings(),
            active,
            Temperature::new(57.5),
            datetime!(2024-01-17 02:01 UTC),
        );
        assert_eq!(state, active);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_deactivation_threshold_is_inclusive() {
        let start = datetime!(2024-01-17 02:00 UTC);
        let now = datetime!(2024-01-17 04:30 UTC);
        let active = EpisodeState::Active {
            start,
            min_temperature: Temperature::new(55.0),
        };
        let (state, commands) = evaluate(&settings(), active, Temperature::new(58.0), now);

        assert_eq!(state, EpisodeState::Idle);
        assert_eq!(
            commands,
            vec![
                Command::Notify(report::deactivated(now, start, Temperature::new(55.0))),
                Command::Actuate(ActuatorCommand::Stop),
            ]
        );
    }

    #[test]
    fn test_scenario_sequence() {
        let mut machine = FrostStateMachine::new(settings());
        let start = datetime!(2024-01-17 01:00 UTC);

        assert!(machine.step(Temperature::new(60.0), start).is_empty());
        assert_eq!(machine.state(), EpisodeState::Idle);

        let activation = start + Duration::minutes(1);
        let commands = machine.step(Temperature::new(56.0), activation);
        assert_eq!(commands.len(), 2);
        assert_eq!(min_temperature(machine.state()), Some(Temperature::new(56.0)));

        let commands = machine.step(Temperature::new(55.0), activation + Duration::minutes(1));
        assert!(commands.is_empty());
        assert_eq!(min_temperature(machine.state()), Some(Temperature::new(55.0)));

        let end = activation + Duration::minutes(95);
        let commands = machine.step(Temperature::new(58.0), end);
        assert_eq!(machine.state(), EpisodeState::Idle);
        match &commands[..] {
            [Command::Notify(notification), Command::Actuate(ActuatorCommand::Stop)] => {
                assert!(notification.body.contains("duration: 1h35m"));
                assert!(notification.body.contains("min temp: 55°F"));
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_repeated_reading_does_not_reactivate() {
        let mut machine = FrostStateMachine::new(settings());
        let now = datetime!(2024-01-17 01:00 UTC);

        assert_eq!(machine.step(Temperature::new(56.0), now).len(), 2);
        for minute in 1..10 {
            let commands = machine.step(Temperature::new(56.0), now + Duration::minutes(minute));
            assert!(commands.is_empty());
        }
        assert_eq!(
            machine.state(),
            EpisodeState::Active {
                start: now,
                min_temperature: Temperature::new(56.0),
            }
        );
    }

    #[test]
    fn test_restart_forgets_episode() {
        // Episode bookkeeping only lives in memory. After a restart the
        // machine is idle again, so a reading between the thresholds neither
        // re-activates nor stops an actuator that is still running.
        let mut machine = FrostStateMachine::new(settings());
        let now = datetime!(2024-01-17 01:00 UTC);
        machine.step(Temperature::new(50.0), now);
        assert!(machine.state().is_active());

        let mut restarted = FrostStateMachine::new(settings());
        assert_eq!(restarted.state(), EpisodeState::Idle);
        let commands = restarted.step(Temperature::new(57.5), now + Duration::hours(1));
        assert!(commands.is_empty());

        // Warming up past the threshold is not reported either
        let commands = restarted.step(Temperature::new(60.0), now + Duration::hours(2));
        assert!(commands.is_empty());
    }
}
