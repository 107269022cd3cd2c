//! Application configuration

use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Campaign expire-sweep interval in seconds (0 = disabled)
    pub sweep_interval_secs: u64,
    /// Bounded wait for a per-entity lock, in milliseconds
    pub lock_wait_ms: u64,
    /// Lock acquisition attempts before surfacing a transient error
    pub lock_retries: u32,
    /// Impact points credited per unit purchased
    pub points_per_unit: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            lock_wait_ms: env::var("LOCK_WAIT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),
            lock_retries: env::var("LOCK_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            points_per_unit: env::var("POINTS_PER_UNIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            sweep_interval_secs: 60,
            lock_wait_ms: 50,
            lock_retries: 3,
            points_per_unit: 10,
        }
    }
}
