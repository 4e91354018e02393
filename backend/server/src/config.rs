use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            seed: true,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();

        Self {
            port: try_load("RUST_PORT", defaults.port),
            seed: try_load("CONTACTS_SEED", defaults.seed),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not set");
    })
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(raw) = var(key) else {
        info!("{key} using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
