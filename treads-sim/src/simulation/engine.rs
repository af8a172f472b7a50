use glam::DVec2;

use treads_core::tank_inputs::Gear;

/* The speed an engine reaches after climbing `progress` ticks along the
 * acceleration curve. The square root gives big speed gains right after a
 * gear engages and smaller and smaller ones as the engine closes in on
 * max_speed, which reads a lot more like a heavy vehicle than a linear
 * ramp does. */
pub fn curve_speed(progress: f64, step_count: u32, max_speed: f64) -> f64 {
    let capped = progress.clamp(0.0, step_count as f64);
    max_speed * (capped / step_count as f64).sqrt()
}

pub struct SquareRootEngine {
    gear: Gear,
    step_count: u32,
    max_speed: f64,
    // how far along the acceleration curve we are, in [0, step_count]
    progress: f64,
    current_speed: f64,
}

impl SquareRootEngine {
    pub fn new(step_count: u32, max_speed: f64) -> SquareRootEngine {
        assert!(step_count >= 1, "engine step count must be at least 1");

        SquareRootEngine {
            gear: Gear::Neutral,
            step_count,
            // magnitude bound; direction comes from the gear, not this sign
            max_speed: max_speed.abs(),
            progress: 0.0,
            current_speed: 0.0,
        }
    }

    // no immediate effect on speed; the new gear is felt on the next update
    pub fn set_gear(&mut self, gear: Gear) {
        self.gear = gear;
    }

    /* Advance the simulation by exactly one tick. Which regime applies falls
     * out of the gear and the sign of the current speed: climbing the curve
     * when the gear agrees with the motion (or the engine is at rest),
     * coasting toward zero under Neutral, and braking toward zero at triple
     * the coasting rate when the gear opposes the motion. */
    pub fn update(&mut self) {
        match self.gear {
            Gear::Drive if self.current_speed >= 0.0 => self.accelerate(1.0),
            Gear::Reverse if self.current_speed <= 0.0 => self.accelerate(-1.0),
            Gear::Neutral => self.decelerate(self.coast_rate()),
            // gear opposes the current direction of travel
            _ => self.decelerate(3.0 * self.coast_rate()),
        }
    }

    pub fn get_current_speed(&self) -> f64 {
        self.current_speed
    }

    // Decompose the current speed along a heading. Angle 0 points up the
    // screen and grows clockwise; positive y grows downward, hence the
    // negated cosine.
    pub fn get_position_delta(&self, angle: f64) -> DVec2 {
        DVec2::new(
            self.current_speed * angle.sin(),
            -self.current_speed * angle.cos(),
        )
    }

    fn accelerate(&mut self, direction: f64) {
        self.progress = (self.progress + 1.0).min(self.step_count as f64);
        self.current_speed =
            direction * curve_speed(self.progress, self.step_count, self.max_speed);
    }

    // one tick of speed decay, stopping exactly at zero rather than
    // overshooting into the opposite direction within the same tick
    fn decelerate(&mut self, rate: f64) {
        let magnitude = (self.current_speed.abs() - rate).max(0.0);
        self.current_speed = self.current_speed.signum() * magnitude;

        // resync so a later re-engagement picks the curve back up at the
        // point matching the speed we decayed to
        self.progress = if self.max_speed > 0.0 {
            self.step_count as f64 * (magnitude / self.max_speed).powi(2)
        } else {
            0.0
        };
    }

    fn coast_rate(&self) -> f64 {
        self.max_speed / self.step_count as f64
    }
}
