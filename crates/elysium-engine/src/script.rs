//! Council script playback and directive interpretation
//!
//! The player is a pure cursor over the fixed line sequence — it never
//! re-orders, skips, or repeats, and pausing the gateway leaves the cursor
//! where it was. The interpreter is a pure mapping from a directive tag to
//! the state effects it drives, so it can be tested without any timers.

use crate::seed;
use elysium_core::{Directive, ScriptLine, SystemPhase, ToolStatus};

pub struct ScriptPlayer {
    lines: &'static [ScriptLine],
    cursor: usize,
}

impl Default for ScriptPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptPlayer {
    pub fn new() -> Self {
        Self::with_lines(seed::COUNCIL_SCRIPT)
    }

    pub fn with_lines(lines: &'static [ScriptLine]) -> Self {
        Self { lines, cursor: 0 }
    }

    /// The next unplayed line, advancing the cursor. None once exhausted.
    pub fn next_line(&mut self) -> Option<&'static ScriptLine> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some(line)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }
}

/// A single state effect produced by interpreting a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Flag the tool as executing the directive, show `via` immediately,
    /// then settle to `into` after the configured delay.
    Stage {
        id: &'static str,
        via: ToolStatus,
        into: ToolStatus,
    },
    /// Force the status immediately, with no staging.
    Force {
        id: &'static str,
        status: ToolStatus,
    },
    RaisePhase(SystemPhase),
}

/// Map a directive tag to the effects it has on the registry and phase.
pub fn interpret(directive: Directive) -> Vec<Effect> {
    match directive {
        Directive::ActivateFoundation => seed::FOUNDATIONAL
            .iter()
            .map(|&id| Effect::Stage {
                id,
                via: seed::boot_status(id),
                into: ToolStatus::Online,
            })
            .collect(),
        Directive::IgniteCoherence => vec![
            Effect::Stage {
                id: seed::COHERENCE_ENGINE,
                via: ToolStatus::Synthesizing,
                into: ToolStatus::Online,
            },
            Effect::RaisePhase(SystemPhase::Operational),
        ],
        Directive::Ascend => {
            let mut effects: Vec<Effect> = seed::FOUNDATIONAL
                .iter()
                .chain(std::iter::once(&seed::COHERENCE_ENGINE))
                .map(|&id| Effect::Force {
                    id,
                    status: ToolStatus::Ascended,
                })
                .collect();
            effects.push(Effect::RaisePhase(SystemPhase::Ascended));
            effects
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elysium_core::MessageKind;

    #[test]
    fn player_yields_every_line_once_in_order() {
        let mut player = ScriptPlayer::new();
        let total = player.total();
        let mut seen = Vec::new();
        while let Some(line) = player.next_line() {
            seen.push(line.text);
        }
        assert_eq!(seen.len(), total);
        assert!(player.is_exhausted());
        assert!(player.next_line().is_none(), "exhausted player stays done");
        for (i, line) in seed::COUNCIL_SCRIPT.iter().enumerate() {
            assert_eq!(seen[i], line.text);
        }
    }

    #[test]
    fn cursor_survives_interleaved_reads() {
        let mut player = ScriptPlayer::new();
        player.next_line();
        player.next_line();
        assert_eq!(player.cursor(), 2);
        // The cursor is the only state; resuming after a pause is just
        // reading the next line.
        let third = player.next_line().unwrap();
        assert_eq!(third.text, seed::COUNCIL_SCRIPT[2].text);
    }

    #[test]
    fn line_kind_tracks_directive_tag() {
        for line in seed::COUNCIL_SCRIPT {
            match line.directive {
                Some(_) => assert_eq!(line.kind(), MessageKind::Directive),
                None => assert_eq!(line.kind(), MessageKind::Thought),
            }
        }
    }

    #[test]
    fn foundation_directive_stages_each_foundational_tool() {
        let effects = interpret(Directive::ActivateFoundation);
        assert_eq!(effects.len(), seed::FOUNDATIONAL.len());
        for effect in &effects {
            match effect {
                Effect::Stage { id, via, into } => {
                    assert!(seed::FOUNDATIONAL.contains(id));
                    assert_ne!(*via, ToolStatus::Offline);
                    assert_eq!(*into, ToolStatus::Online);
                }
                other => panic!("unexpected effect {:?}", other),
            }
        }
        // The coherence engine is untouched by the foundation directive.
        assert!(!effects.iter().any(|e| matches!(
            e,
            Effect::Stage { id, .. } if *id == seed::COHERENCE_ENGINE
        )));
    }

    #[test]
    fn coherence_directive_synthesizes_then_goes_operational() {
        let effects = interpret(Directive::IgniteCoherence);
        assert_eq!(
            effects,
            vec![
                Effect::Stage {
                    id: seed::COHERENCE_ENGINE,
                    via: ToolStatus::Synthesizing,
                    into: ToolStatus::Online,
                },
                Effect::RaisePhase(SystemPhase::Operational),
            ]
        );
    }

    #[test]
    fn ascension_freezes_every_tool_and_raises_terminal_phase() {
        let effects = interpret(Directive::Ascend);
        let forced: Vec<&str> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Force { id, status } => {
                    assert_eq!(*status, ToolStatus::Ascended);
                    Some(*id)
                }
                _ => None,
            })
            .collect();
        assert_eq!(forced.len(), seed::FOUNDATIONAL.len() + 1);
        assert!(forced.contains(&seed::COHERENCE_ENGINE));
        assert!(effects.contains(&Effect::RaisePhase(SystemPhase::Ascended)));
    }
}
