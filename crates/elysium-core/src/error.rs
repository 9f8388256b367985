//! Error types for Elysium
//!
//! The simulated domain has no real failure modes: unknown tool ids are
//! ignored, out-of-range thresholds are clamped, and stale timer fires are
//! discarded. The only surfaced error is talking to an engine that has
//! already stopped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("engine stopped")]
    EngineStopped,
}

pub type Result<T> = std::result::Result<T, Error>;
