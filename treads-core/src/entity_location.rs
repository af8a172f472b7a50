use glam::DVec2;

// EntityLocation is where a tank sits in the world and which way its hull
// points == everything the presentation layer needs to draw it
#[derive(Copy, Clone)]
pub struct EntityLocation {
    pub position: DVec2,
    // radians; 0 points up the screen and the angle grows clockwise
    pub rotation: f64,
}

impl EntityLocation {
    pub fn at_origin() -> EntityLocation {
        EntityLocation {
            position: DVec2::ZERO,
            rotation: 0.0,
        }
    }
}
