//! Core types for the Elysium suite simulation

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    clamp_threshold, CouncilMessage, Directive, MessageKind, NotificationLevel, ScriptLine,
    Speaker, SystemPhase, Tool, ToolConfigPatch, ToolStatus,
};
