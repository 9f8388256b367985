//! The orchestration engine — a single-consumer event loop
//!
//! Every input — commands from the presentation layer and ticks from the
//! timer tasks — enters one queue. A single consumer owns the registry, the
//! council log, and the phase controller, and processes each event to
//! completion, so no locking exists anywhere in the core. Timer events
//! carry the generation current when their timer was armed; a mismatch
//! means the owning context was torn down and the event is discarded.

use crate::autotune;
use crate::config::EngineConfig;
use crate::council::{self, CouncilLog};
use crate::phase::PhaseController;
use crate::registry::ToolRegistry;
use crate::script::{interpret, Effect, ScriptPlayer};
use crate::seed;
use crate::telemetry::{self, Feed};
use chrono::Utc;
use elysium_core::{
    CouncilMessage, Directive, Error, Result, SystemPhase, Tool, ToolConfigPatch, ToolStatus,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// External commands from the presentation layer.
#[derive(Debug)]
pub enum Command {
    ToggleGateway {
        active: bool,
    },
    SelectTool {
        id: String,
    },
    CloseToolDetail,
    OpenToolConfig {
        id: String,
    },
    CloseToolConfig,
    SaveToolConfig {
        id: String,
        patch: ToolConfigPatch,
    },
    SendArchitectMessage {
        text: String,
    },
    Snapshot {
        reply: oneshot::Sender<EngineSnapshot>,
    },
    Shutdown,
}

/// Everything that can enter the engine queue.
#[derive(Debug)]
enum EngineEvent {
    Command(Command),
    ScriptTick { generation: u64 },
    TelemetryTick { id: String, generation: u64 },
    AutoTuneTick { id: String, generation: u64 },
    Settle {
        id: String,
        from: ToolStatus,
        into: ToolStatus,
        generation: u64,
    },
    ClearDirectiveFlag { id: String, generation: u64 },
}

/// State-change notifications for observers.
#[derive(Debug, Clone)]
pub enum EngineUpdate {
    GatewayChanged { active: bool },
    PhaseChanged { phase: SystemPhase },
    ToolChanged { tool: Tool },
    MessageAppended { message: CouncilMessage },
    TelemetryLine { id: String, line: String },
    TuneLine { id: String, line: String },
    TuneLogCleared { id: String },
    ScriptExhausted,
}

/// Full observable state for rendering.
#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub tools: Vec<Tool>,
    pub discussion: Vec<CouncilMessage>,
    pub phase: SystemPhase,
    pub gateway_active: bool,
    /// Telemetry feed of the tool whose detail view is open, if any.
    pub telemetry: Vec<String>,
    /// Auto-tune log of the tool whose config view is open, if any.
    pub tune_log: Vec<String>,
}

/// Cloneable handle exposing the engine's command surface.
#[derive(Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<EngineEvent>,
    updates: broadcast::Sender<EngineUpdate>,
}

impl EngineHandle {
    pub async fn toggle_gateway(&self, active: bool) -> Result<()> {
        self.send(Command::ToggleGateway { active }).await
    }

    pub async fn select_tool(&self, id: impl Into<String>) -> Result<()> {
        self.send(Command::SelectTool { id: id.into() }).await
    }

    pub async fn close_tool_detail(&self) -> Result<()> {
        self.send(Command::CloseToolDetail).await
    }

    pub async fn open_tool_config(&self, id: impl Into<String>) -> Result<()> {
        self.send(Command::OpenToolConfig { id: id.into() }).await
    }

    pub async fn close_tool_config(&self) -> Result<()> {
        self.send(Command::CloseToolConfig).await
    }

    pub async fn save_tool_config(&self, id: impl Into<String>, patch: ToolConfigPatch) -> Result<()> {
        self.send(Command::SaveToolConfig {
            id: id.into(),
            patch,
        })
        .await
    }

    pub async fn send_architect_message(&self, text: impl Into<String>) -> Result<()> {
        self.send(Command::SendArchitectMessage { text: text.into() })
            .await
    }

    pub async fn snapshot(&self) -> Result<EngineSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot { reply }).await?;
        rx.await.map_err(|_| Error::EngineStopped)
    }

    /// Subscribe to state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineUpdate> {
        self.updates.subscribe()
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(EngineEvent::Command(command))
            .await
            .map_err(|_| Error::EngineStopped)
    }
}

/// A live timer context: the generation stamped into its events plus the
/// token that tears it down.
struct Armed {
    gen: u64,
    cancel: CancellationToken,
}

impl Armed {
    fn disarm(self) {
        self.cancel.cancel();
    }
}

/// An open tool-detail view and its telemetry subscription.
struct DetailView {
    id: String,
    feed: Feed,
    arm: Option<Armed>,
}

/// An open tool-configuration view and its auto-tune subscription.
struct ConfigView {
    id: String,
    log: Feed,
    arm: Option<Armed>,
}

pub struct Engine {
    queue_rx: mpsc::Receiver<EngineEvent>,
    queue_tx: mpsc::Sender<EngineEvent>,
    updates: broadcast::Sender<EngineUpdate>,
    config: EngineConfig,
    rng: StdRng,
    registry: ToolRegistry,
    council: CouncilLog,
    player: ScriptPlayer,
    phases: PhaseController,
    gateway_active: bool,
    /// Monotonic source for arm generations.
    gen_counter: u64,
    /// Generation of the current gateway session; staged transitions carry
    /// it and die when the gateway cycles.
    session_gen: u64,
    /// Cancels every session-scoped one-shot (settle and flag timers).
    session_cancel: CancellationToken,
    script_arm: Option<Armed>,
    detail: Option<DetailView>,
    tuning: Option<ConfigView>,
}

impl Engine {
    /// Start the engine on a fresh seed roster. Returns the command handle
    /// and the join handle of the event-loop task.
    pub fn spawn(config: EngineConfig) -> (EngineHandle, JoinHandle<()>) {
        let (queue_tx, queue_rx) = mpsc::channel(256);
        let (updates, _) = broadcast::channel(256);
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let engine = Engine {
            queue_rx,
            queue_tx: queue_tx.clone(),
            updates: updates.clone(),
            config,
            rng,
            registry: ToolRegistry::new(seed::seed_tools()),
            council: CouncilLog::new(),
            player: ScriptPlayer::new(),
            phases: PhaseController::new(),
            gateway_active: false,
            gen_counter: 0,
            session_gen: 0,
            session_cancel: CancellationToken::new(),
            script_arm: None,
            detail: None,
            tuning: None,
        };
        let handle = EngineHandle {
            tx: queue_tx,
            updates,
        };
        let join = tokio::spawn(engine.run());
        (handle, join)
    }

    async fn run(mut self) {
        info!(
            "engine started ({} tools, {} script lines)",
            self.registry.list().len(),
            self.player.total()
        );
        while let Some(event) = self.queue_rx.recv().await {
            match event {
                EngineEvent::Command(command) => {
                    if self.handle_command(command) {
                        break;
                    }
                }
                EngineEvent::ScriptTick { generation } => self.on_script_tick(generation),
                EngineEvent::TelemetryTick { id, generation } => {
                    self.on_telemetry_tick(id, generation)
                }
                EngineEvent::AutoTuneTick { id, generation } => {
                    self.on_autotune_tick(id, generation)
                }
                EngineEvent::Settle {
                    id,
                    from,
                    into,
                    generation,
                } => self.on_settle(id, from, into, generation),
                EngineEvent::ClearDirectiveFlag { id, generation } => {
                    self.on_clear_flag(id, generation)
                }
            }
        }
        self.teardown();
        info!("engine stopped");
    }

    /// Returns true when the engine should shut down.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleGateway { active } => {
                if active {
                    self.gateway_on();
                } else {
                    self.gateway_off();
                }
            }
            Command::SelectTool { id } => self.select_tool(id),
            Command::CloseToolDetail => self.close_detail(),
            Command::OpenToolConfig { id } => self.open_config(id),
            Command::CloseToolConfig => self.close_config(),
            Command::SaveToolConfig { id, patch } => self.save_config(id, patch),
            Command::SendArchitectMessage { text } => {
                let ascended = self.phases.phase().is_terminal();
                let appended =
                    council::architect_message(&mut self.council, &mut self.rng, ascended, &text);
                for message in appended {
                    self.emit(EngineUpdate::MessageAppended { message });
                }
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
            Command::Shutdown => return true,
        }
        false
    }

    // -----------------------------------------------------------------
    // Gateway
    // -----------------------------------------------------------------

    fn gateway_on(&mut self) {
        if self.gateway_active {
            return;
        }
        self.gateway_active = true;
        self.session_gen = self.next_gen();
        self.session_cancel = CancellationToken::new();
        self.emit(EngineUpdate::GatewayChanged { active: true });
        if self.phases.gateway_on() {
            self.emit(EngineUpdate::PhaseChanged {
                phase: self.phases.phase(),
            });
        }
        self.arm_script();
        self.sync_detail();
        self.sync_tuning();
    }

    fn gateway_off(&mut self) {
        if !self.gateway_active {
            return;
        }
        self.gateway_active = false;
        // Staged transitions do not survive a gateway cycle.
        self.session_gen = self.next_gen();
        self.session_cancel.cancel();
        self.emit(EngineUpdate::GatewayChanged { active: false });

        if let Some(armed) = self.script_arm.take() {
            armed.disarm();
        }
        if let Some(view) = self.detail.as_mut() {
            if let Some(armed) = view.arm.take() {
                armed.disarm();
            }
        }
        if let Some(view) = self.tuning.as_mut() {
            if let Some(armed) = view.arm.take() {
                armed.disarm();
            }
        }

        // Ascension freezes the roster; before it, everything drops offline.
        if !self.phases.phase().is_terminal() {
            for id in self.registry.set_all_offline() {
                self.emit_tool(&id);
            }
            if self.phases.gateway_off() {
                self.emit(EngineUpdate::PhaseChanged {
                    phase: self.phases.phase(),
                });
            }
        }

        // The open feed shows only the offline placeholder from here.
        if let Some(id) = self.detail.as_ref().map(|v| v.id.clone()) {
            let name = self
                .registry
                .get(&id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| id.clone());
            if let Some(view) = self.detail.as_mut() {
                view.feed.reset_offline(&name);
            }
            self.emit(EngineUpdate::TelemetryLine {
                id,
                line: telemetry::offline_line(&name),
            });
        }
    }

    // -----------------------------------------------------------------
    // Script playback
    // -----------------------------------------------------------------

    fn arm_script(&mut self) {
        if !self.gateway_active || self.player.is_exhausted() || self.script_arm.is_some() {
            return;
        }
        let gen = self.next_gen();
        let cancel = CancellationToken::new();
        let cadence = Duration::from_millis(self.config.cadence_ms);
        let tx = self.queue_tx.clone();
        let token = cancel.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(cadence) => {
                        if tx.send(EngineEvent::ScriptTick { generation: gen }).await.is_err() {
                            break;
                        }
                    }
                    _ = token.cancelled() => break,
                }
            }
        });
        self.script_arm = Some(Armed { gen, cancel });
        debug!("script cadence armed at cursor {}", self.player.cursor());
    }

    fn on_script_tick(&mut self, generation: u64) {
        let valid = self
            .script_arm
            .as_ref()
            .is_some_and(|armed| armed.gen == generation);
        if !valid || !self.gateway_active {
            return;
        }
        let Some(line) = self.player.next_line() else {
            return;
        };
        let message = self.council.append(line.speaker, line.kind(), line.text);
        self.emit(EngineUpdate::MessageAppended { message });
        if let Some(directive) = line.directive {
            self.apply_directive(directive);
        }
        if self.player.is_exhausted() {
            if let Some(armed) = self.script_arm.take() {
                armed.disarm();
            }
            info!("council script exhausted after {} lines", self.player.total());
            self.emit(EngineUpdate::ScriptExhausted);
        }
    }

    fn apply_directive(&mut self, directive: Directive) {
        info!("directive {:?}", directive);
        for effect in interpret(directive) {
            match effect {
                Effect::Stage { id, via, into } => {
                    let flagged = self.registry.set_executing(id, true);
                    let changed = self.registry.apply_status(id, via);
                    if flagged || changed {
                        self.emit_tool(id);
                    }
                    self.arm_settle(id, via, into);
                    self.arm_flag_clear(id);
                }
                Effect::Force { id, status } => {
                    let flagged = self.registry.set_executing(id, false);
                    let changed = self.registry.apply_status(id, status);
                    if flagged || changed {
                        self.emit_tool(id);
                    }
                }
                Effect::RaisePhase(phase) => {
                    if self.phases.raise(phase) {
                        self.emit(EngineUpdate::PhaseChanged { phase });
                    }
                }
            }
        }
        self.sync_detail();
    }

    fn arm_settle(&mut self, id: &str, from: ToolStatus, into: ToolStatus) {
        let delay = Duration::from_millis(self.config.settle_ms);
        let generation = self.session_gen;
        let tx = self.queue_tx.clone();
        let token = self.session_cancel.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let _ = tx
                        .send(EngineEvent::Settle { id, from, into, generation })
                        .await;
                }
                _ = token.cancelled() => {}
            }
        });
    }

    fn on_settle(&mut self, id: String, from: ToolStatus, into: ToolStatus, generation: u64) {
        if generation != self.session_gen || !self.gateway_active {
            return;
        }
        let Some(tool) = self.registry.get(&id) else {
            return;
        };
        // A later directive (ascension) may have taken the tool elsewhere;
        // only the staged intermediate settles.
        if tool.status != from {
            return;
        }
        if self.registry.apply_status(&id, into) {
            self.emit_tool(&id);
        }
        self.sync_detail();
    }

    fn arm_flag_clear(&mut self, id: &str) {
        let delay = Duration::from_millis(self.config.directive_flash_ms);
        let generation = self.session_gen;
        let tx = self.queue_tx.clone();
        let token = self.session_cancel.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let _ = tx
                        .send(EngineEvent::ClearDirectiveFlag { id, generation })
                        .await;
                }
                _ = token.cancelled() => {}
            }
        });
    }

    fn on_clear_flag(&mut self, id: String, generation: u64) {
        if generation != self.session_gen {
            return;
        }
        if self.registry.set_executing(&id, false) {
            self.emit_tool(&id);
        }
    }

    // -----------------------------------------------------------------
    // Tool detail view / telemetry
    // -----------------------------------------------------------------

    fn select_tool(&mut self, id: String) {
        let Some(tool) = self.registry.get(&id) else {
            debug!("select_tool: unknown tool id {}, ignoring", id);
            return;
        };
        let name = tool.name.clone();
        self.close_detail();
        let feed = if self.gateway_active {
            Feed::opening(self.config.log_cap)
        } else {
            let mut feed = Feed::new(self.config.log_cap);
            feed.reset_offline(&name);
            feed
        };
        self.detail = Some(DetailView {
            id,
            feed,
            arm: None,
        });
        self.sync_detail();
    }

    fn close_detail(&mut self) {
        if let Some(view) = self.detail.take() {
            if let Some(armed) = view.arm {
                armed.disarm();
            }
        }
    }

    /// Start or stop the selected tool's generator to match its liveness.
    fn sync_detail(&mut self) {
        let (id, armed) = match &self.detail {
            Some(view) => (view.id.clone(), view.arm.is_some()),
            None => return,
        };
        let live = self.gateway_active
            && self
                .registry
                .get(&id)
                .is_some_and(|tool| tool.status != ToolStatus::Offline);
        if live && !armed {
            self.arm_telemetry();
        } else if !live && armed {
            if let Some(view) = self.detail.as_mut() {
                if let Some(a) = view.arm.take() {
                    a.disarm();
                }
            }
        }
    }

    fn arm_telemetry(&mut self) {
        let delay = self.telemetry_delay();
        let gen = self.next_gen();
        let cancel = CancellationToken::new();
        let Some(view) = self.detail.as_mut() else {
            return;
        };
        let id = view.id.clone();
        view.arm = Some(Armed {
            gen,
            cancel: cancel.clone(),
        });
        let tx = self.queue_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let _ = tx
                        .send(EngineEvent::TelemetryTick { id, generation: gen })
                        .await;
                }
                _ = cancel.cancelled() => {}
            }
        });
    }

    fn telemetry_delay(&mut self) -> Duration {
        let (min, max) = (self.config.telemetry_min_ms, self.config.telemetry_max_ms);
        let ms = if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        Duration::from_millis(ms)
    }

    fn on_telemetry_tick(&mut self, id: String, generation: u64) {
        let valid = self.detail.as_ref().is_some_and(|view| {
            view.id == id && view.arm.as_ref().is_some_and(|a| a.gen == generation)
        });
        if !valid || !self.gateway_active {
            return;
        }
        let Some(tool) = self.registry.get(&id) else {
            return;
        };
        if tool.status == ToolStatus::Offline {
            if let Some(view) = self.detail.as_mut() {
                view.arm = None;
            }
            return;
        }
        let name = tool.name.clone();
        let line = telemetry::log_line(&mut self.rng, &name, Utc::now());
        if let Some(view) = self.detail.as_mut() {
            view.feed.push(line.clone());
            view.arm = None;
        }
        self.emit(EngineUpdate::TelemetryLine { id, line });
        // One-shot chain: each tick re-arms with a fresh random delay.
        self.arm_telemetry();
    }

    // -----------------------------------------------------------------
    // Tool config view / auto-tune
    // -----------------------------------------------------------------

    fn open_config(&mut self, id: String) {
        let Some(tool) = self.registry.get(&id) else {
            debug!("open_tool_config: unknown tool id {}, ignoring", id);
            return;
        };
        let auto_tune = tool.auto_tune;
        self.close_config();
        self.tuning = Some(ConfigView {
            id,
            log: Feed::new(self.config.log_cap),
            arm: None,
        });
        if auto_tune && self.gateway_active {
            self.engage_tuning();
        }
    }

    fn close_config(&mut self) {
        if let Some(view) = self.tuning.take() {
            if let Some(armed) = view.arm {
                armed.disarm();
            }
        }
    }

    /// Append the engage banner and start the tuning timer.
    fn engage_tuning(&mut self) {
        let Some(id) = self.tuning.as_ref().map(|v| v.id.clone()) else {
            return;
        };
        let name = self
            .registry
            .get(&id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.clone());
        let line = autotune::engaged_line(&name);
        if let Some(view) = self.tuning.as_mut() {
            view.log.push(line.clone());
        }
        self.emit(EngineUpdate::TuneLine { id, line });
        self.arm_autotune();
    }

    /// Start or stop the tuning timer to match liveness, without a banner.
    /// Used when the gateway cycles while a config view stays open.
    fn sync_tuning(&mut self) {
        let (id, armed) = match &self.tuning {
            Some(view) => (view.id.clone(), view.arm.is_some()),
            None => return,
        };
        let live = self.gateway_active
            && self
                .registry
                .get(&id)
                .is_some_and(|tool| tool.auto_tune);
        if live && !armed {
            self.arm_autotune();
        } else if !live && armed {
            if let Some(view) = self.tuning.as_mut() {
                if let Some(a) = view.arm.take() {
                    a.disarm();
                }
            }
        }
    }

    fn arm_autotune(&mut self) {
        let gen = self.next_gen();
        let cancel = CancellationToken::new();
        let Some(view) = self.tuning.as_mut() else {
            return;
        };
        if view.arm.is_some() {
            return;
        }
        let id = view.id.clone();
        view.arm = Some(Armed {
            gen,
            cancel: cancel.clone(),
        });
        let interval = Duration::from_millis(self.config.autotune_ms);
        let tx = self.queue_tx.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        let event = EngineEvent::AutoTuneTick {
                            id: id.clone(),
                            generation: gen,
                        };
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    _ = cancel.cancelled() => break,
                }
            }
        });
    }

    fn on_autotune_tick(&mut self, id: String, generation: u64) {
        let valid = self.tuning.as_ref().is_some_and(|view| {
            view.id == id && view.arm.as_ref().is_some_and(|a| a.gen == generation)
        });
        if !valid || !self.gateway_active {
            return;
        }
        let chance = self.config.level_shift_chance;
        let Some(tool) = self.registry.get_mut(&id) else {
            return;
        };
        if !tool.auto_tune {
            // Flag was saved off since the timer armed; stop drifting.
            if let Some(view) = self.tuning.as_mut() {
                if let Some(a) = view.arm.take() {
                    a.disarm();
                }
            }
            return;
        }
        let lines = autotune::tick(&mut self.rng, tool, chance);
        if lines.is_empty() {
            return;
        }
        self.emit_tool(&id);
        for line in lines {
            if let Some(view) = self.tuning.as_mut() {
                view.log.push(line.clone());
            }
            self.emit(EngineUpdate::TuneLine {
                id: id.clone(),
                line,
            });
        }
    }

    fn save_config(&mut self, id: String, patch: ToolConfigPatch) {
        if self.registry.apply_config(&id, patch) {
            self.emit_tool(&id);
        }
        let Some(enabled) = patch.auto_tune else {
            return;
        };
        let open = self.tuning.as_ref().is_some_and(|view| view.id == id);
        if !open {
            return;
        }
        if enabled {
            let armed = self.tuning.as_ref().is_some_and(|view| view.arm.is_some());
            if !armed && self.gateway_active {
                self.engage_tuning();
            }
        } else {
            // Disabling cancels the timer immediately and clears the log.
            if let Some(view) = self.tuning.as_mut() {
                if let Some(a) = view.arm.take() {
                    a.disarm();
                }
                view.log.clear();
            }
            self.emit(EngineUpdate::TuneLogCleared { id });
        }
    }

    // -----------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------

    fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            tools: self.registry.list().to_vec(),
            discussion: self.council.messages().to_vec(),
            phase: self.phases.phase(),
            gateway_active: self.gateway_active,
            telemetry: self
                .detail
                .as_ref()
                .map(|view| view.feed.to_vec())
                .unwrap_or_default(),
            tune_log: self
                .tuning
                .as_ref()
                .map(|view| view.log.to_vec())
                .unwrap_or_default(),
        }
    }

    fn next_gen(&mut self) -> u64 {
        self.gen_counter += 1;
        self.gen_counter
    }

    fn emit(&self, update: EngineUpdate) {
        let _ = self.updates.send(update);
    }

    fn emit_tool(&self, id: &str) {
        if let Some(tool) = self.registry.get(id) {
            self.emit(EngineUpdate::ToolChanged { tool: tool.clone() });
        }
    }

    fn teardown(&mut self) {
        self.session_cancel.cancel();
        if let Some(armed) = self.script_arm.take() {
            armed.disarm();
        }
        self.close_detail();
        self.close_config();
    }
}
