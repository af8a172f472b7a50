#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gear {
    Drive,
    Reverse,
    Neutral,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotationStatus {
    InSpinClockwise,
    InSpinCounterclockwise,
    NotInSpin,
}

// TankInputs tells the simulation what a tank's driver is currently doing
#[derive(Copy, Clone)]
pub struct TankInputs {
    pub gear: Gear,
    pub rotation_status: RotationStatus,
}

impl Default for TankInputs {
    fn default() -> Self {
        TankInputs {
            gear: Gear::Neutral,
            rotation_status: RotationStatus::NotInSpin,
        }
    }
}
