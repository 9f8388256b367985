//! Core types for Elysium

use serde::{Deserialize, Serialize};

/// Visible status of a simulated tool.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ToolStatus {
    Offline,
    Online,
    Calibrating,
    Learning,
    Processing,
    Syncing,
    Optimizing,
    AwaitingDirective,
    Synthesizing,
    Ascended,
}

impl ToolStatus {
    /// Display label as shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            ToolStatus::Offline => "Offline",
            ToolStatus::Online => "Online",
            ToolStatus::Calibrating => "Calibrating",
            ToolStatus::Learning => "Learning",
            ToolStatus::Processing => "Processing",
            ToolStatus::Syncing => "Syncing",
            ToolStatus::Optimizing => "Optimizing",
            ToolStatus::AwaitingDirective => "Awaiting Directive",
            ToolStatus::Synthesizing => "Synthesizing",
            ToolStatus::Ascended => "Ascended",
        }
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// System-wide phase. Monotonic once past Offline; Ascended is terminal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SystemPhase {
    Offline,
    Booting,
    Operational,
    Ascended,
}

impl SystemPhase {
    /// Position in the forward progression, used to reject regressions.
    pub fn rank(self) -> u8 {
        match self {
            SystemPhase::Offline => 0,
            SystemPhase::Booting => 1,
            SystemPhase::Operational => 2,
            SystemPhase::Ascended => 3,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SystemPhase::Ascended)
    }
}

impl std::fmt::Display for SystemPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SystemPhase::Offline => "Offline",
            SystemPhase::Booting => "Booting",
            SystemPhase::Operational => "Operational",
            SystemPhase::Ascended => "Ascended",
        };
        write!(f, "{}", s)
    }
}

/// Notification verbosity for a tool.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Low,
    Medium,
    High,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Low => "low",
            NotificationLevel::Medium => "medium",
            NotificationLevel::High => "high",
        }
    }

    pub const ALL: [NotificationLevel; 3] = [
        NotificationLevel::Low,
        NotificationLevel::Medium,
        NotificationLevel::High,
    ];
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Council voice. The persona names are opaque labels from the suite's lore.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Speaker {
    Tesla,
    Einstein,
    Architect,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Speaker::Tesla => "Tesla",
            Speaker::Einstein => "Einstein",
            Speaker::Architect => "Architect",
        };
        write!(f, "{}", s)
    }
}

/// Whether a council message is plain discussion or a directive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Thought,
    Directive,
}

/// One simulated subsystem in the suite.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub status: ToolStatus,
    /// Invariant: 0 ..= 100.
    pub activation_threshold: u8,
    pub notification_level: NotificationLevel,
    pub auto_tune: bool,
    /// Transient flag, set only while a directive targeting this tool is
    /// being visually emphasized.
    #[serde(default)]
    pub executing_directive: bool,
}

/// One utterance in the council discussion feed.
///
/// Ids are assigned at emission time and are strictly increasing; the feed
/// is append-only for the life of a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CouncilMessage {
    pub id: u64,
    pub speaker: Speaker,
    pub kind: MessageKind,
    pub text: String,
}

/// Partial configuration update for a tool. Absent fields are left alone.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ToolConfigPatch {
    pub activation_threshold: Option<u8>,
    pub notification_level: Option<NotificationLevel>,
    pub auto_tune: Option<bool>,
}

/// Symbolic directive tag carried by script lines.
///
/// Directives are keyed by tag rather than by matching the directive's
/// flavor text, so rewording a script line cannot silently break the
/// state transitions it drives.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Directive {
    /// Bring the foundational tools online through their boot statuses.
    ActivateFoundation,
    /// Start the coherence engine and raise the system to Operational.
    IgniteCoherence,
    /// Freeze every tool and raise the system to its terminal phase.
    Ascend,
}

/// One line of the fixed council script.
#[derive(Clone, Copy, Debug)]
pub struct ScriptLine {
    pub speaker: Speaker,
    pub text: &'static str,
    pub directive: Option<Directive>,
}

impl ScriptLine {
    pub fn kind(&self) -> MessageKind {
        if self.directive.is_some() {
            MessageKind::Directive
        } else {
            MessageKind::Thought
        }
    }
}

/// Clamp a threshold value into the 0..=100 invariant range.
pub fn clamp_threshold(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
