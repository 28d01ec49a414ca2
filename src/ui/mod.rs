//! UI module for partyplay
//!
//! This module handles the screens, rendering, and the main event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod game_screen;
pub mod generator;
pub mod layout;
pub mod navigation;
pub mod shake;

pub use app_component::AppComponent;
pub use game_screen::{GameScreen, GameSettings, Phase, SendOutcome};
pub use layout::LayoutManager;

use crate::config::Config;
use crate::logger::Logger;
use crate::transport::WsTransport;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the terminal client until the player quits
pub async fn run_app(config: Config, bootstrap: Option<String>, logger: Logger) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (transport, transport_rx) = WsTransport::connect(config.server.url.clone());
    let mut app = AppComponent::new(
        transport,
        transport_rx,
        &config.server.url,
        GameSettings::from_config(&config.ui),
        logger,
    );
    let mut event_handler = EventHandler::new();

    // The first layout renders before the connection is up
    app.start(bootstrap.as_deref());

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent<WsTransport>,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        match event_handler.next_event().await? {
            event @ EventType::Key(_) => app.handle_event(event),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }

        // Everything from the transport and timers is applied here, on the UI task
        app.process_transport_events();
        app.process_background_actions();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
