use treads_core::entity_location::EntityLocation;
use treads_core::tank_inputs::{RotationStatus, TankInputs};
use treads_core::GLOBAL_CONFIG;

use crate::simulation::engine::SquareRootEngine;

pub struct Tank {
    pub inputs: TankInputs,
    pub entity_location: EntityLocation,
    engine: SquareRootEngine,
}

impl Tank {
    pub fn new() -> Tank {
        Tank {
            inputs: TankInputs::default(),
            entity_location: EntityLocation::at_origin(),
            engine: SquareRootEngine::new(
                GLOBAL_CONFIG.engine_step_count,
                GLOBAL_CONFIG.tank_max_speed,
            ),
        }
    }

    /* Apply this tick's inputs and move the tank: spin the hull, advance the
     * engine by one tick, then translate by the engine's displacement along
     * the hull heading. The engine only ever sees one update per sim step;
     * calling it more often would climb the curve faster than configured. */
    pub fn do_sim_step(&mut self) {
        match self.inputs.rotation_status {
            RotationStatus::InSpinClockwise => {
                self.entity_location.rotation += GLOBAL_CONFIG.tank_spin
            }
            RotationStatus::InSpinCounterclockwise => {
                self.entity_location.rotation -= GLOBAL_CONFIG.tank_spin
            }
            RotationStatus::NotInSpin => {}
        }

        self.engine.set_gear(self.inputs.gear);
        self.engine.update();

        self.entity_location.position += self
            .engine
            .get_position_delta(self.entity_location.rotation);
    }

    // drives the HUD readout and the motion trail intensity
    pub fn current_speed(&self) -> f64 {
        self.engine.get_current_speed()
    }
}
