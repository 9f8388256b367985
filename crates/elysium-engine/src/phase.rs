//! System phase state machine
//!
//! Offline → Booting → Operational → Ascended, with the gateway toggle
//! moving between Offline and the active phases until Ascended, which is
//! terminal for the session.

use elysium_core::SystemPhase;
use tracing::info;

pub struct PhaseController {
    phase: SystemPhase,
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseController {
    pub fn new() -> Self {
        Self {
            phase: SystemPhase::Offline,
        }
    }

    pub fn phase(&self) -> SystemPhase {
        self.phase
    }

    /// Gateway toggled on. Returns true when the phase changed.
    pub fn gateway_on(&mut self) -> bool {
        if self.phase == SystemPhase::Offline {
            self.transition(SystemPhase::Booting);
            true
        } else {
            false
        }
    }

    /// Gateway toggled off. Ascended is unaffected; active phases return
    /// to Offline. Returns true when the phase changed.
    pub fn gateway_off(&mut self) -> bool {
        match self.phase {
            SystemPhase::Booting | SystemPhase::Operational => {
                self.transition(SystemPhase::Offline);
                true
            }
            SystemPhase::Offline | SystemPhase::Ascended => false,
        }
    }

    /// Directive-driven forward transition. Regressions and anything after
    /// Ascended are ignored; the phase never raises out of Offline (the
    /// script only plays while the gateway is active).
    pub fn raise(&mut self, target: SystemPhase) -> bool {
        if self.phase == SystemPhase::Offline || self.phase.is_terminal() {
            return false;
        }
        if target.rank() > self.phase.rank() {
            self.transition(target);
            true
        } else {
            false
        }
    }

    fn transition(&mut self, next: SystemPhase) {
        info!("system phase {} -> {}", self.phase, next);
        self.phase = next;
    }
}
