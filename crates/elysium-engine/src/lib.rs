//! Elysium engine — scripted orchestration for the simulated tool suite
//!
//! The engine replays a fixed council script, maps its directives onto the
//! tool registry and the system phase, and runs per-tool telemetry and
//! auto-tune loops. All state is owned by a single event-loop task; the
//! presentation layer talks to it through [`EngineHandle`] and renders
//! whatever [`EngineSnapshot`] and the update stream expose.

pub mod autotune;
pub mod config;
pub mod council;
pub mod engine;
pub mod phase;
pub mod registry;
pub mod script;
pub mod seed;
pub mod telemetry;

pub use config::EngineConfig;
pub use engine::{Command, Engine, EngineHandle, EngineSnapshot, EngineUpdate};
