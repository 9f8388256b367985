//! Synthetic telemetry — randomized activity lines for an online tool
//!
//! Lines are pure flavor: one action, one target, and one status code drawn
//! uniformly from fixed tables, stamped and tagged with the tool's name.
//! The feed is a bounded ring buffer; when the gateway drops, the buffer is
//! replaced by a single offline placeholder.

use crate::seed::{TELEMETRY_ACTIONS, TELEMETRY_STATUS_CODES, TELEMETRY_TARGETS};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use std::collections::VecDeque;

/// Build one synthetic activity line for a tool.
pub fn log_line<R: Rng>(rng: &mut R, tool_name: &str, now: DateTime<Utc>) -> String {
    let action = TELEMETRY_ACTIONS[rng.gen_range(0..TELEMETRY_ACTIONS.len())];
    let target = TELEMETRY_TARGETS[rng.gen_range(0..TELEMETRY_TARGETS.len())];
    let code = TELEMETRY_STATUS_CODES[rng.gen_range(0..TELEMETRY_STATUS_CODES.len())];
    format!(
        "[{}] [{}] {} -> {}... [{}]",
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        tool_name,
        action,
        target,
        code
    )
}

/// Placeholder shown while the gateway is inactive.
pub fn offline_line(tool_name: &str) -> String {
    format!(
        "[SYSTEM] {} is OFFLINE. Awaiting Elysium Gateway activation.",
        tool_name
    )
}

/// Bounded log buffer: keeps the most recent `cap` lines, dropping the
/// oldest first. Used for both telemetry feeds and auto-tune logs.
#[derive(Debug, Clone)]
pub struct Feed {
    lines: VecDeque<String>,
    cap: usize,
}

impl Feed {
    pub fn new(cap: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            cap,
        }
    }

    /// A fresh feed seeded with the opening line a new subscription shows.
    pub fn opening(cap: usize) -> Self {
        let mut feed = Self::new(cap);
        feed.push("Initializing data feed...".to_string());
        feed
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.cap {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Replace the whole buffer with the single offline placeholder.
    pub fn reset_offline(&mut self, tool_name: &str) {
        self.lines.clear();
        self.lines.push_back(offline_line(tool_name));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}
