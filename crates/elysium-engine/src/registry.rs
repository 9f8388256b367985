//! Tool registry — the authoritative in-memory tool store
//!
//! Owned exclusively by the engine task; every mutation happens inside its
//! event loop, so readers always see a consistent view. Commands that name
//! an unknown tool id are silently ignored (a consistency guard, not a
//! user-facing error).

use elysium_core::{clamp_threshold, Tool, ToolConfigPatch, ToolStatus};
use tracing::debug;

pub struct ToolRegistry {
    /// Seed order is listing order.
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Tool> {
        self.tools.iter_mut().find(|t| t.id == id)
    }

    pub fn list(&self) -> &[Tool] {
        &self.tools
    }

    /// Set a tool's status. Returns true when the status actually changed.
    pub fn apply_status(&mut self, id: &str, status: ToolStatus) -> bool {
        match self.get_mut(id) {
            Some(tool) if tool.status != status => {
                debug!("{} status {} -> {}", id, tool.status, status);
                tool.status = status;
                true
            }
            Some(_) => false,
            None => {
                debug!("apply_status: unknown tool id {}, ignoring", id);
                false
            }
        }
    }

    /// Set or clear the directive-emphasis flag. Returns true on change.
    pub fn set_executing(&mut self, id: &str, executing: bool) -> bool {
        match self.get_mut(id) {
            Some(tool) if tool.executing_directive != executing => {
                tool.executing_directive = executing;
                true
            }
            _ => false,
        }
    }

    /// Apply a configuration patch. Thresholds are clamped into 0..=100.
    /// Returns true when any field actually changed, so re-applying the
    /// same values is observably idempotent.
    pub fn apply_config(&mut self, id: &str, patch: ToolConfigPatch) -> bool {
        let Some(tool) = self.get_mut(id) else {
            debug!("apply_config: unknown tool id {}, ignoring", id);
            return false;
        };
        let mut changed = false;
        if let Some(threshold) = patch.activation_threshold {
            let clamped = clamp_threshold(threshold as i32);
            if tool.activation_threshold != clamped {
                tool.activation_threshold = clamped;
                changed = true;
            }
        }
        if let Some(level) = patch.notification_level {
            if tool.notification_level != level {
                tool.notification_level = level;
                changed = true;
            }
        }
        if let Some(auto_tune) = patch.auto_tune {
            if tool.auto_tune != auto_tune {
                tool.auto_tune = auto_tune;
                changed = true;
            }
        }
        changed
    }

    /// Force every tool Offline and clear directive-emphasis flags.
    /// Returns the ids whose state changed.
    pub fn set_all_offline(&mut self) -> Vec<String> {
        let mut changed = Vec::new();
        for tool in &mut self.tools {
            if tool.status != ToolStatus::Offline || tool.executing_directive {
                tool.status = ToolStatus::Offline;
                tool.executing_directive = false;
                changed.push(tool.id.clone());
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_tools;
    use elysium_core::NotificationLevel;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(seed_tools())
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let mut reg = registry();
        assert!(!reg.apply_status("no-such-tool", ToolStatus::Online));
        assert!(!reg.apply_config("no-such-tool", ToolConfigPatch::default()));
        assert!(reg.get("no-such-tool").is_none());
    }

    #[test]
    fn threshold_is_clamped_to_100() {
        let mut reg = registry();
        let patch = ToolConfigPatch {
            activation_threshold: Some(255),
            ..Default::default()
        };
        assert!(reg.apply_config("identity-node", patch));
        assert_eq!(reg.get("identity-node").unwrap().activation_threshold, 100);
    }

    #[test]
    fn apply_config_is_idempotent() {
        let mut reg = registry();
        let patch = ToolConfigPatch {
            activation_threshold: Some(42),
            notification_level: Some(NotificationLevel::Medium),
            auto_tune: Some(true),
        };
        assert!(reg.apply_config("identity-node", patch));
        // Second application of identical values changes nothing.
        assert!(!reg.apply_config("identity-node", patch));
        let tool = reg.get("identity-node").unwrap();
        assert_eq!(tool.activation_threshold, 42);
        assert_eq!(tool.notification_level, NotificationLevel::Medium);
        assert!(tool.auto_tune);
    }

    #[test]
    fn status_change_reports_only_real_transitions() {
        let mut reg = registry();
        assert!(reg.apply_status("entropy-engine", ToolStatus::Processing));
        assert!(!reg.apply_status("entropy-engine", ToolStatus::Processing));
        assert!(reg.apply_status("entropy-engine", ToolStatus::Online));
    }

    #[test]
    fn set_all_offline_clears_statuses_and_flags() {
        let mut reg = registry();
        reg.apply_status("identity-node", ToolStatus::Online);
        reg.set_executing("identity-node", true);
        reg.apply_status("coherence-engine", ToolStatus::Synthesizing);

        let changed = reg.set_all_offline();
        assert_eq!(changed.len(), 2);
        for tool in reg.list() {
            assert_eq!(tool.status, ToolStatus::Offline);
            assert!(!tool.executing_directive);
        }
        // Already-offline registry reports nothing.
        assert!(reg.set_all_offline().is_empty());
    }
}
