//! Tests for elysium-core: statuses, phases, messages, patches

use elysium_core::*;

// ===========================================================================
// ToolStatus
// ===========================================================================

#[test]
fn tool_status_serde_roundtrip() {
    let statuses = vec![
        ToolStatus::Offline,
        ToolStatus::Online,
        ToolStatus::Calibrating,
        ToolStatus::Learning,
        ToolStatus::Processing,
        ToolStatus::Syncing,
        ToolStatus::Optimizing,
        ToolStatus::AwaitingDirective,
        ToolStatus::Synthesizing,
        ToolStatus::Ascended,
    ];
    for status in statuses {
        let json = serde_json::to_string(&status).unwrap();
        let back: ToolStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}

#[test]
fn tool_status_labels_match_display() {
    assert_eq!(ToolStatus::AwaitingDirective.label(), "Awaiting Directive");
    assert_eq!(format!("{}", ToolStatus::AwaitingDirective), "Awaiting Directive");
    assert_eq!(format!("{}", ToolStatus::Synthesizing), "Synthesizing");
    assert_eq!(format!("{}", ToolStatus::Offline), "Offline");
}

// ===========================================================================
// SystemPhase
// ===========================================================================

#[test]
fn system_phase_ranks_are_strictly_ordered() {
    let phases = [
        SystemPhase::Offline,
        SystemPhase::Booting,
        SystemPhase::Operational,
        SystemPhase::Ascended,
    ];
    for window in phases.windows(2) {
        assert!(window[0].rank() < window[1].rank());
    }
}

#[test]
fn only_ascended_is_terminal() {
    assert!(SystemPhase::Ascended.is_terminal());
    assert!(!SystemPhase::Offline.is_terminal());
    assert!(!SystemPhase::Booting.is_terminal());
    assert!(!SystemPhase::Operational.is_terminal());
}

// ===========================================================================
// NotificationLevel
// ===========================================================================

#[test]
fn notification_level_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&NotificationLevel::Low).unwrap(), r#""low""#);
    assert_eq!(serde_json::to_string(&NotificationLevel::Medium).unwrap(), r#""medium""#);
    assert_eq!(serde_json::to_string(&NotificationLevel::High).unwrap(), r#""high""#);
}

#[test]
fn notification_level_all_covers_every_variant() {
    assert_eq!(NotificationLevel::ALL.len(), 3);
    for level in NotificationLevel::ALL {
        assert!(NotificationLevel::ALL.contains(&level));
        assert_eq!(level.as_str(), format!("{}", level));
    }
}

// ===========================================================================
// MessageKind / Speaker
// ===========================================================================

#[test]
fn message_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&MessageKind::Thought).unwrap(), r#""thought""#);
    assert_eq!(serde_json::to_string(&MessageKind::Directive).unwrap(), r#""directive""#);
}

#[test]
fn speaker_display_uses_persona_names() {
    assert_eq!(format!("{}", Speaker::Tesla), "Tesla");
    assert_eq!(format!("{}", Speaker::Einstein), "Einstein");
    assert_eq!(format!("{}", Speaker::Architect), "Architect");
}

// ===========================================================================
// Tool
// ===========================================================================

fn sample_tool() -> Tool {
    Tool {
        id: "entropy-engine".into(),
        name: "Quantum Entropy Engine".into(),
        description: "Generates true randomness for security.".into(),
        long_description: "Long text.".into(),
        status: ToolStatus::Offline,
        activation_threshold: 60,
        notification_level: NotificationLevel::Medium,
        auto_tune: false,
        executing_directive: false,
    }
}

#[test]
fn tool_serde_roundtrip() {
    let tool = sample_tool();
    let json = serde_json::to_string(&tool).unwrap();
    let back: Tool = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, "entropy-engine");
    assert_eq!(back.status, ToolStatus::Offline);
    assert_eq!(back.activation_threshold, 60);
    assert_eq!(back.notification_level, NotificationLevel::Medium);
}

#[test]
fn tool_executing_directive_defaults_to_false() {
    // Older snapshots without the transient flag still deserialize.
    let json = r#"{
        "id": "x", "name": "X", "description": "d", "long_description": "ld",
        "status": "Offline", "activation_threshold": 10,
        "notification_level": "low", "auto_tune": false
    }"#;
    let tool: Tool = serde_json::from_str(json).unwrap();
    assert!(!tool.executing_directive);
}

// ===========================================================================
// CouncilMessage
// ===========================================================================

#[test]
fn council_message_serde_roundtrip() {
    let msg = CouncilMessage {
        id: 7,
        speaker: Speaker::Einstein,
        kind: MessageKind::Thought,
        text: "Fascinating.".into(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    let back: CouncilMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, 7);
    assert_eq!(back.speaker, Speaker::Einstein);
    assert_eq!(back.kind, MessageKind::Thought);
    assert_eq!(back.text, "Fascinating.");
}

// ===========================================================================
// ToolConfigPatch
// ===========================================================================

#[test]
fn default_patch_changes_nothing() {
    let patch = ToolConfigPatch::default();
    assert!(patch.activation_threshold.is_none());
    assert!(patch.notification_level.is_none());
    assert!(patch.auto_tune.is_none());
}

// ===========================================================================
// clamp_threshold
// ===========================================================================

#[test]
fn clamp_threshold_bounds() {
    assert_eq!(clamp_threshold(-5), 0);
    assert_eq!(clamp_threshold(0), 0);
    assert_eq!(clamp_threshold(50), 50);
    assert_eq!(clamp_threshold(100), 100);
    assert_eq!(clamp_threshold(105), 100);
}

// ===========================================================================
// ScriptLine
// ===========================================================================

#[test]
fn script_line_kind_follows_tag() {
    let thought = ScriptLine {
        speaker: Speaker::Tesla,
        text: "Power levels nominal.",
        directive: None,
    };
    assert_eq!(thought.kind(), MessageKind::Thought);

    let directive = ScriptLine {
        speaker: Speaker::Architect,
        text: "Directive: begin.",
        directive: Some(Directive::ActivateFoundation),
    };
    assert_eq!(directive.kind(), MessageKind::Directive);
}
