pub mod entity_location;
pub mod tank_inputs;
mod settings;

pub use settings::GLOBAL_CONFIG;

pub type TankID = usize;
