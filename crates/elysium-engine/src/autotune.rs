//! Auto-tune — random parameter drift for a tool under council management
//!
//! Each tick nudges the activation threshold by a small integer drift and
//! occasionally re-rolls the notification level. Only real changes produce
//! log lines; a no-change tick is silent.

use chrono::Utc;
use elysium_core::{clamp_threshold, NotificationLevel, Tool};
use rand::Rng;

/// Threshold drift bounds, inclusive.
pub const DRIFT_MIN: i32 = -3;
pub const DRIFT_MAX: i32 = 3;

/// Run one auto-tune tick against a tool's live configuration.
/// Returns the log lines for the changes made — empty when nothing moved.
pub fn tick<R: Rng>(rng: &mut R, tool: &mut Tool, level_shift_chance: f64) -> Vec<String> {
    let mut lines = Vec::new();

    let drift = rng.gen_range(DRIFT_MIN..=DRIFT_MAX);
    let next = clamp_threshold(tool.activation_threshold as i32 + drift);
    if next != tool.activation_threshold {
        tool.activation_threshold = next;
        lines.push(format!(
            "[{}] Threshold adjusted by {:+} -> {}%",
            stamp(),
            drift,
            next
        ));
    }

    if rng.gen_bool(level_shift_chance.clamp(0.0, 1.0)) {
        let next_level = NotificationLevel::ALL[rng.gen_range(0..NotificationLevel::ALL.len())];
        if next_level != tool.notification_level {
            tool.notification_level = next_level;
            lines.push(format!(
                "[{}] Coherence shifted. Notification -> {}",
                stamp(),
                next_level.as_str().to_uppercase()
            ));
        }
    }

    lines
}

/// Banner line appended when auto-tune engages for a tool.
pub fn engaged_line(tool_name: &str) -> String {
    format!("[{}] Auto-Tune engaged. Monitoring {}...", stamp(), tool_name)
}

fn stamp() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}
