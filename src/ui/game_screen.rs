//! The in-game screen and its event router.
//!
//! `GameScreen` owns everything scoped to one game: the generated controls,
//! the instruction text, the countdown and the transport handle. All state
//! is mutated from the UI task only.
//!
//! Phases move `WaitingForStart -> Active -> Finished`. The first layout is
//! supplied out-of-band through [`GameScreen::enter`]; `Finished` is
//! absorbing and every event received afterwards is ignored.

use crate::config::UiConfig;
use crate::constants::{COUNTDOWN_DEFAULT_SECONDS, LANE_A_TITLE, LANE_B_TITLE, SHAKE_DEFAULT_PRESSES, SHAKE_DEFAULT_WINDOW_MS};
use crate::protocol::{Event, GameSummary, UiElement};
use crate::transport::Transport;
use crate::ui::components::{InstructionBar, LaneView};
use crate::ui::core::{Action, Component, Countdown};
use crate::ui::generator::{ControlPanel, Lane};
use crate::ui::layout::LayoutManager;
use crate::ui::navigation::Navigator;
use crate::ui::shake::ShakeDetector;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    WaitingForStart,
    Active,
    Finished(GameSummary),
}

/// What happened to an outbound action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// No active connection or the transport refused it. Not retried.
    Dropped,
}

#[derive(Debug, Clone)]
pub struct GameSettings {
    pub default_countdown_seconds: u32,
    pub shake_key: char,
    pub shake_presses: u32,
    pub shake_window: Duration,
}

impl GameSettings {
    pub fn from_config(ui: &UiConfig) -> Self {
        let defaults = Self::default();
        Self {
            default_countdown_seconds: ui.default_countdown_seconds,
            shake_key: ui.shake_key_char().unwrap_or(defaults.shake_key),
            shake_presses: ui.shake_presses,
            shake_window: ui.shake_window(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_countdown_seconds: COUNTDOWN_DEFAULT_SECONDS,
            shake_key: 's',
            shake_presses: SHAKE_DEFAULT_PRESSES,
            shake_window: Duration::from_millis(SHAKE_DEFAULT_WINDOW_MS),
        }
    }
}

pub struct GameScreen<T: Transport, N: Navigator> {
    panel: ControlPanel,
    phase: Phase,
    instruction: Option<String>,
    remaining_seconds: Option<u32>,
    level: u32,
    countdown: Countdown,
    shake: ShakeDetector,
    settings: GameSettings,
    transport: T,
    navigator: N,
    torn_down: bool,
}

impl<T: Transport, N: Navigator> GameScreen<T, N> {
    pub fn new(transport: T, navigator: N, action_tx: mpsc::UnboundedSender<Action>, settings: GameSettings) -> Self {
        Self {
            panel: ControlPanel::new(),
            phase: Phase::WaitingForStart,
            instruction: None,
            remaining_seconds: None,
            level: 0,
            countdown: Countdown::new(action_tx),
            shake: ShakeDetector::new(settings.shake_presses, settings.shake_window),
            settings,
            transport,
            navigator,
            torn_down: false,
        }
    }

    /// Enter the screen with the serialized `GAME_STARTED` handed over by the
    /// previous screen. A missing or malformed payload is logged and leaves
    /// the screen empty; returns whether the first layout was rendered.
    pub fn enter(&mut self, bootstrap: Option<&str>) -> bool {
        let Some(payload) = bootstrap else {
            log::warn!("Game: no starting layout supplied");
            return false;
        };

        match Event::decode(payload) {
            Ok(event @ Event::GameStarted { .. }) => {
                self.route(event);
                true
            }
            Ok(other) => {
                log::warn!("Game: expected GAME_STARTED to start, got {}", other.kind());
                false
            }
            Err(e) => {
                log::warn!("Game: failed to read starting layout: {}", e);
                false
            }
        }
    }

    /// Dispatch one decoded server event to its handler
    pub fn route(&mut self, event: Event) {
        if let Phase::Finished(_) = self.phase {
            log::debug!("Router: game finished, ignoring {}", event.kind());
            return;
        }

        log::info!("Router: handling {}", event.kind());
        match event {
            Event::GameStarted { ui_elements } => {
                if self.phase == Phase::WaitingForStart {
                    self.render_level(&ui_elements);
                } else {
                    log::debug!("Router: game already started, ignoring GAME_STARTED");
                }
            }
            Event::NextLevel { ui_elements } => self.render_level(&ui_elements),
            Event::NextAction { sentence, time } => {
                let seconds = time.unwrap_or(self.settings.default_countdown_seconds);
                self.instruction = Some(sentence);
                self.remaining_seconds = Some(seconds);
                self.countdown.start(seconds);
            }
            Event::GameOver { score, level } => self.finish(GameSummary { score, level }),
            Event::PlayerAction { element_ref } => {
                log::debug!("Router: ignoring echoed action for element {}", element_ref.id);
            }
            Event::Unknown => {
                log::debug!("Router: ignoring unknown event type");
            }
        }
    }

    fn render_level(&mut self, elements: &[UiElement]) {
        self.panel.generate(elements);
        self.shake.reset();
        self.level += 1;
        self.phase = Phase::Active;
    }

    fn finish(&mut self, summary: GameSummary) {
        self.countdown.cancel();
        self.remaining_seconds = None;
        self.transport.close();
        self.phase = Phase::Finished(summary.clone());
        log::info!("Game: over with score {} at level {}", summary.score, summary.level);

        match summary.to_payload() {
            Ok(payload) => self.navigator.show_summary(payload),
            Err(e) => log::error!("Game: failed to serialize summary: {}", e),
        }
    }

    /// Apply a countdown tick if it belongs to the live countdown
    pub fn on_countdown_tick(&mut self, generation: u64, remaining: u32) {
        if self.countdown.accept(generation) {
            self.remaining_seconds = Some(remaining);
        }
    }

    /// Activate the control with `id`. `None` when no such control exists.
    pub fn activate(&mut self, id: u32) -> Option<SendOutcome> {
        match self.panel.activate(id) {
            Some(action) => Some(self.send_action(action)),
            None => {
                log::debug!("Game: no control with id {}", id);
                None
            }
        }
    }

    /// Fire every armed shake listener
    pub fn shake(&mut self) -> Vec<SendOutcome> {
        self.panel
            .trigger_shake()
            .into_iter()
            .map(|action| self.send_action(action))
            .collect()
    }

    /// Serialize and send an outbound event if a connection is active
    pub fn send_action(&mut self, event: Event) -> SendOutcome {
        if self.is_finished() {
            log::debug!("Game: game is over, dropping {}", event.kind());
            return SendOutcome::Dropped;
        }
        if !self.transport.is_connected() {
            log::warn!("Game: no active connection, dropping {}", event.kind());
            return SendOutcome::Dropped;
        }

        let text = match event.encode() {
            Ok(text) => text,
            Err(e) => {
                log::error!("Game: failed to encode {}: {}", event.kind(), e);
                return SendOutcome::Dropped;
            }
        };

        match self.transport.send(text) {
            Ok(()) => SendOutcome::Sent,
            Err(e) => {
                log::warn!("Game: send failed, dropping {}: {}", event.kind(), e);
                SendOutcome::Dropped
            }
        }
    }

    /// Stop the countdown and close the connection
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.countdown.cancel();
        self.transport.close();
        log::info!("Game: screen torn down");
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }
}

impl<T: Transport, N: Navigator> Drop for GameScreen<T, N> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T: Transport, N: Navigator> Component for GameScreen<T, N> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if c == self.settings.shake_key => {
                if self.shake.register(Instant::now()) {
                    Action::Shake
                } else {
                    Action::None
                }
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.panel.focus_next();
                Action::None
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.panel.focus_previous();
                Action::None
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.panel.focus_other_lane();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.panel.focused() {
                Some(control) => Action::ActivateControl(control.id()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ActivateControl(id) => {
                self.activate(id);
                Action::None
            }
            Action::Shake => {
                self.shake();
                Action::None
            }
            Action::Inbound(event) => {
                self.route(event);
                Action::None
            }
            Action::CountdownTick { generation, remaining } => {
                self.on_countdown_tick(generation, remaining);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::game_layout(rect);

        InstructionBar::render(
            f,
            chunks[0],
            self.instruction.as_deref(),
            self.remaining_seconds,
            self.level,
            self.panel.shake_listener_count() > 0,
        );

        // A failed start leaves the screen empty
        if self.phase == Phase::WaitingForStart {
            return;
        }

        let lanes = LayoutManager::lanes_layout(chunks[1]);
        let focused = self.panel.focused().map(|control| control.id());
        LaneView::render(f, lanes[0], &self.panel, Lane::A, LANE_A_TITLE, focused);
        LaneView::render(f, lanes[1], &self.panel, Lane::B, LANE_B_TITLE, focused);
    }
}
