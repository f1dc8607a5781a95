use anyhow::{bail, Result};

use crate::state::Temperature;

#[derive(Copy, Clone, Debug)]
pub struct CoreConfig {
    // Turn protection on at or below this temperature
    activate_below: Temperature,

    // Turn protection off at or above this temperature
    deactivate_at_or_above: Temperature,

    // Seconds the actuator runs for on activation, in case we never get to
    // switch it off ourselves
    safety_ceiling: u32,
}

impl CoreConfig {
    pub fn new(
        activate_below: Temperature,
        deactivate_at_or_above: Temperature,
        safety_ceiling: u32,
    ) -> Result<Self> {
        let on = f32::from(activate_below);
        let off = f32::from(deactivate_at_or_above);

        if !on.is_finite() || !off.is_finite() {
            bail!("Thresholds must be finite, got {} and {}", on, off);
        }
        // Without a gap the actuator would chatter around a single temperature
        if on >= off {
            bail!(
                "Activation threshold {} must be below deactivation threshold {}",
                activate_below,
                deactivate_at_or_above
            );
        }
        if safety_ceiling < 1 {
            bail!("Safety ceiling must be at least one second");
        }

        Ok(CoreConfig {
            activate_below,
            deactivate_at_or_above,
            safety_ceiling,
        })
    }

    pub fn activate_below(&self) -> Temperature {
        self.activate_below
    }

    pub fn deactivate_at_or_above(&self) -> Temperature {
        self.deactivate_at_or_above
    }

    pub fn safety_ceiling(&self) -> u32 {
        self.safety_ceiling
    }
}
