//! Engine configuration
//!
//! All tunable timings in one place. Loaded from TOML at startup, falls
//! back to defaults if no config file exists.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Script playback interval in milliseconds.
    pub cadence_ms: u64,
    /// Delay before a staged status transition settles (intermediate → final).
    pub settle_ms: u64,
    /// How long a tool keeps its directive-emphasis flag set.
    pub directive_flash_ms: u64,
    /// Telemetry inter-arrival bounds; each delay is drawn uniformly from
    /// `[telemetry_min_ms, telemetry_max_ms)`.
    pub telemetry_min_ms: u64,
    pub telemetry_max_ms: u64,
    /// Auto-tune tick interval in milliseconds.
    pub autotune_ms: u64,
    /// Per-tick probability that auto-tune re-rolls the notification level.
    pub level_shift_chance: f64,
    /// Capacity of the telemetry and auto-tune ring buffers.
    pub log_cap: usize,
    /// Seed for the engine's random generator. None seeds from entropy;
    /// tests pass a fixed value for deterministic runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cadence_ms: 4_000,
            settle_ms: 2_500,
            directive_flash_ms: 4_000,
            telemetry_min_ms: 1_500,
            telemetry_max_ms: 2_500,
            autotune_ms: 1_500,
            level_shift_chance: 0.15,
            log_cap: 100,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} — using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {} — using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// A sped-up profile for tests and quick demos: same shape, tens of
    /// milliseconds instead of seconds.
    pub fn fast(rng_seed: u64) -> Self {
        Self {
            cadence_ms: 25,
            settle_ms: 10,
            directive_flash_ms: 15,
            telemetry_min_ms: 5,
            telemetry_max_ms: 10,
            autotune_ms: 10,
            rng_seed: Some(rng_seed),
            ..Self::default()
        }
    }
}
