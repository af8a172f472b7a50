use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub tick_ms: u64,
    pub tick_amount: u64,
    pub tank_amount: usize,
    pub engine_step_count: u32,
    pub tank_max_speed: f64,
    pub tank_spin: f64,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("tick_ms", 30)?
            .set_default("tick_amount", 60)?
            .set_default("tank_amount", 1)?
            .set_default("engine_step_count", 10)?
            .set_default("tank_max_speed", 10.0)?
            .set_default("tank_spin", 0.1)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
