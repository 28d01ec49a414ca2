use crate::logger::Logger;
use crate::protocol::Event;
use crate::transport::{Transport, TransportEvent};
use crate::ui::components::{ConnectionStatus, LobbyComponent, LogsPanel, StatusBar, SummaryComponent};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::game_screen::{GameScreen, GameSettings};
use crate::ui::layout::LayoutManager;
use crate::ui::navigation::ActionNavigator;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// The screen currently in front
pub enum Screen<T: Transport> {
    /// Waiting on the live connection for the game to start
    Lobby(LobbyComponent),
    Game(Box<GameScreen<T, ActionNavigator>>),
    /// Terminal; nothing navigates away from it
    Summary(SummaryComponent),
}

pub struct AppComponent<T: Transport + Clone> {
    screen: Screen<T>,
    logs_panel: LogsPanel,
    show_logs: bool,

    // Services
    transport: T,
    transport_rx: mpsc::UnboundedReceiver<TransportEvent>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    settings: GameSettings,
    status: ConnectionStatus,
    should_quit: bool,
}

impl<T: Transport + Clone> AppComponent<T> {
    pub fn new(
        transport: T,
        transport_rx: mpsc::UnboundedReceiver<TransportEvent>,
        server_url: &str,
        settings: GameSettings,
        logger: Logger,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Screen::Lobby(LobbyComponent::new(server_url)),
            logs_panel: LogsPanel::new(logger),
            show_logs: false,
            transport,
            transport_rx,
            action_tx,
            action_rx,
            settings,
            status: ConnectionStatus::default(),
            should_quit: false,
        }
    }

    /// Start from the lobby, or go straight into the game when a starting
    /// layout was supplied up front.
    pub fn start(&mut self, bootstrap: Option<&str>) {
        if bootstrap.is_some() {
            log::info!("App: starting game from supplied layout");
            self.enter_game(bootstrap);
        } else {
            log::info!("App: waiting in lobby");
        }
    }

    fn enter_game(&mut self, bootstrap: Option<&str>) {
        let navigator = ActionNavigator::new(self.action_tx.clone());
        let mut game = GameScreen::new(
            self.transport.clone(),
            navigator,
            self.action_tx.clone(),
            self.settings.clone(),
        );
        game.enter(bootstrap);
        self.screen = Screen::Game(Box::new(game));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &Screen<T> {
        &self.screen
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    /// Drain everything the transport delivered since the last call
    pub fn process_transport_events(&mut self) {
        while let Ok(event) = self.transport_rx.try_recv() {
            self.handle_transport_event(event);
        }
    }

    fn handle_transport_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Connected => {
                log::info!("App: connected");
                self.status = ConnectionStatus::Connected;
            }
            TransportEvent::Disconnected => {
                log::info!("App: disconnected");
                self.status = ConnectionStatus::Disconnected;
            }
            TransportEvent::Error(message) => {
                log::error!("App: transport error: {}", message);
            }
            TransportEvent::Inbound(event) => self.handle_inbound(event),
        }
    }

    fn handle_inbound(&mut self, event: Event) {
        if let Screen::Lobby(_) = self.screen {
            if let Event::GameStarted { .. } = event {
                // Hand the layout over the same way a bootstrap file would
                match event.encode() {
                    Ok(payload) => self.enter_game(Some(&payload)),
                    Err(e) => log::error!("Lobby: failed to hand over layout: {}", e),
                }
            } else {
                log::debug!("Lobby: ignoring {}", event.kind());
            }
            return;
        }

        self.handle_action(Action::Inbound(event));
    }

    /// Drain actions produced by the countdown and the navigator
    pub fn process_background_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleLogs => self.show_logs = !self.show_logs,
            Action::ShowSummary(payload) => {
                log::info!("App: showing summary");
                self.screen = Screen::Summary(SummaryComponent::from_payload(&payload));
            }
            Action::None => {}
            other => match &mut self.screen {
                Screen::Game(game) => {
                    game.update(other);
                }
                _ => log::debug!("App: no game running, ignoring {:?}", other),
            },
        }
    }

    /// Process one input event
    pub fn handle_event(&mut self, event_type: EventType) {
        if let EventType::Key(key) = event_type {
            let action = if self.show_logs {
                self.logs_panel.handle_key_events(key)
            } else {
                self.handle_key_events(key)
            };
            self.handle_action(action);
        }
    }

    /// Tear down the game, if any, and close the connection
    pub fn shutdown(&mut self) {
        if let Screen::Game(game) = &mut self.screen {
            game.teardown();
        }
        self.transport.close();
    }
}

impl<T: Transport + Clone> Component for AppComponent<T> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('G') => Action::ToggleLogs,
            _ => match &mut self.screen {
                Screen::Lobby(lobby) => lobby.handle_key_events(key),
                Screen::Game(game) => game.handle_key_events(key),
                Screen::Summary(summary) => summary.handle_key_events(key),
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        match &mut self.screen {
            Screen::Lobby(lobby) => lobby.render(f, chunks[0]),
            Screen::Game(game) => game.render(f, chunks[0]),
            Screen::Summary(summary) => summary.render(f, chunks[0]),
        }

        StatusBar::render(f, chunks[1], self.status);

        if self.show_logs {
            self.logs_panel.render(f, rect);
        }
    }
}
