// --- File: config.rs ---
use crate::constants::{
    INITIAL_GENERATIONS_PER_SECOND, MAX_GENERATIONS_PER_SECOND, MIN_GENERATIONS_PER_SECOND,
    RANDOM_FILL_PROBABILITY, SPEED_ADJUST_STEP,
};
use std::str::FromStr;

const SPEED_VAR: &str = "LIFE_SPEED";
const FILL_VAR: &str = "LIFE_FILL";
const SEED_VAR: &str = "LIFE_SEED";

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub generations_per_second: u32,
    pub min_generations_per_second: u32,
    pub max_generations_per_second: u32,
    pub speed_step: u32,
    /// Chance that randomize sets a cell alive.
    pub fill_probability: f64,
    /// Fixed RNG seed; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations_per_second: INITIAL_GENERATIONS_PER_SECOND,
            min_generations_per_second: MIN_GENERATIONS_PER_SECOND,
            max_generations_per_second: MAX_GENERATIONS_PER_SECOND,
            speed_step: SPEED_ADJUST_STEP,
            fill_probability: RANDOM_FILL_PROBABILITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by `LIFE_SPEED`, `LIFE_FILL` and `LIFE_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(speed) = parse_var::<u32>(&lookup, SPEED_VAR) {
            config.generations_per_second = config.clamp_speed(speed);
        }
        if let Some(fill) = parse_var::<f64>(&lookup, FILL_VAR) {
            if (0.0..=1.0).contains(&fill) {
                config.fill_probability = fill;
            } else {
                log::warn!("Ignoring {FILL_VAR}={fill}: expected a probability in 0..=1");
            }
        }
        config.seed = parse_var::<u64>(&lookup, SEED_VAR);

        config
    }

    pub fn clamp_speed(&self, generations_per_second: u32) -> u32 {
        generations_per_second.clamp(
            self.min_generations_per_second,
            self.max_generations_per_second,
        )
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}
