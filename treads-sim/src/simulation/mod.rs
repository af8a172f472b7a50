use std::thread;
use std::time::{Duration, Instant};

use treads_core::tank_inputs::{Gear, RotationStatus};
use treads_core::{TankID, GLOBAL_CONFIG};

use self::tank::Tank;

pub mod engine;
pub mod tank;


pub struct SimServer {
    tanks: Vec<Tank>,
    tick: u64,
}

impl SimServer {
    pub fn new(tank_amount: usize) -> SimServer {
        let tanks = (0..tank_amount).map(|_| Tank::new()).collect();
        SimServer { tanks, tick: 0 }
    }

    // WARNING: this function only returns once the configured tick budget is spent
    pub fn start_loop(&mut self) {
        let max_tick_duration = Duration::from_millis(GLOBAL_CONFIG.tick_ms);

        while self.tick < GLOBAL_CONFIG.tick_amount {
            let start_time = Instant::now();

            self.apply_scripted_inputs();
            self.simulate_tanks();
            self.report_telemetry();

            // wait until tick time has elapsed
            let remaining_tick_duration = max_tick_duration
                .checked_sub(start_time.elapsed())
                .expect("sim tick took longer than configured length");
            thread::sleep(remaining_tick_duration);

            self.tick += 1;
        }
    }

    // a fixed demo schedule that walks every engine regime: accelerate to
    // saturation, turn while saturated, coast down, then reverse back
    // through zero
    fn apply_scripted_inputs(&mut self) {
        let gear = match self.tick {
            t if t < 15 => Gear::Drive,
            t if t < 25 => Gear::Neutral,
            _ => Gear::Reverse,
        };
        let rotation_status = if (10..20).contains(&self.tick) {
            RotationStatus::InSpinClockwise
        } else {
            RotationStatus::NotInSpin
        };

        for tank in self.tanks.iter_mut() {
            tank.inputs.gear = gear;
            tank.inputs.rotation_status = rotation_status;
        }
    }

    fn simulate_tanks(&mut self) {
        for tank in self.tanks.iter_mut() {
            tank.do_sim_step();
        }
    }

    fn report_telemetry(&self) {
        for (id, tank) in self.tanks.iter().enumerate() {
            self.print_tank_line(id, tank);
        }
    }

    fn print_tank_line(&self, id: TankID, tank: &Tank) {
        println!(
            "tick {:>3} tank {}: speed {:+.3} position ({:+.3}, {:+.3}) heading {:.3}",
            self.tick,
            id,
            tank.current_speed(),
            tank.entity_location.position.x,
            tank.entity_location.position.y,
            tank.entity_location.rotation
        );
    }
}
