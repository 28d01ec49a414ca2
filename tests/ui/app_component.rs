use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use partyplay::logger::Logger;
use partyplay::protocol::{ElementType, Event, GameSummary, UiElement};
use partyplay::transport::{MemoryTransport, TransportEvent};
use partyplay::ui::app_component::Screen;
use partyplay::ui::components::ConnectionStatus;
use partyplay::ui::core::EventType;
use partyplay::ui::{AppComponent, GameSettings};
use tokio::sync::mpsc;

struct Harness {
    app: AppComponent<MemoryTransport>,
    transport: MemoryTransport,
    events_tx: mpsc::UnboundedSender<TransportEvent>,
}

fn harness() -> Harness {
    let transport = MemoryTransport::connected();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let app = AppComponent::new(
        transport.clone(),
        events_rx,
        "ws://127.0.0.1:8080/game",
        GameSettings::default(),
        Logger::new(),
    );
    Harness {
        app,
        transport,
        events_tx,
    }
}

fn game_started() -> Event {
    Event::GameStarted {
        ui_elements: vec![
            UiElement::new(1, ElementType::Button, "Jump"),
            UiElement::new(2, ElementType::Switch, "Shield"),
        ],
    }
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_starts_in_lobby_without_layout() {
    let mut h = harness();
    h.app.start(None);

    match h.app.screen() {
        Screen::Lobby(lobby) => assert_eq!(lobby.server_url(), "ws://127.0.0.1:8080/game"),
        _ => panic!("expected the lobby"),
    }
    assert_eq!(h.app.connection_status(), ConnectionStatus::Connecting);
}

#[test]
fn test_supplied_layout_starts_game() {
    let mut h = harness();
    let payload = game_started().encode().unwrap();
    h.app.start(Some(&payload));

    match h.app.screen() {
        Screen::Game(game) => assert_eq!(game.panel().controls().len(), 2),
        _ => panic!("expected the game screen"),
    }
}

#[test]
fn test_connection_events_update_status() {
    let mut h = harness();

    h.events_tx.send(TransportEvent::Connected).unwrap();
    h.app.process_transport_events();
    assert_eq!(h.app.connection_status(), ConnectionStatus::Connected);

    h.events_tx.send(TransportEvent::Error("reset".to_string())).unwrap();
    h.events_tx.send(TransportEvent::Disconnected).unwrap();
    h.app.process_transport_events();
    assert_eq!(h.app.connection_status(), ConnectionStatus::Disconnected);
}

#[test]
fn test_lobby_enters_game_on_game_started() {
    let mut h = harness();
    h.app.start(None);

    h.events_tx.send(TransportEvent::Inbound(game_started())).unwrap();
    h.app.process_transport_events();

    match h.app.screen() {
        Screen::Game(game) => {
            assert!(!game.is_finished());
            assert_eq!(game.level(), 1);
        }
        _ => panic!("expected the game screen"),
    }
}

#[test]
fn test_lobby_ignores_other_events() {
    let mut h = harness();
    h.app.start(None);

    h.events_tx
        .send(TransportEvent::Inbound(Event::NextAction {
            sentence: "too early".to_string(),
            time: Some(3),
        }))
        .unwrap();
    h.app.process_transport_events();

    assert!(matches!(h.app.screen(), Screen::Lobby(_)));
}

#[test]
fn test_game_over_shows_summary() {
    let mut h = harness();
    h.app.start(Some(&game_started().encode().unwrap()));

    h.events_tx
        .send(TransportEvent::Inbound(Event::GameOver { score: 120, level: 4 }))
        .unwrap();
    h.app.process_transport_events();
    h.app.process_background_actions();

    match h.app.screen() {
        Screen::Summary(summary) => {
            assert_eq!(summary.summary(), Some(&GameSummary { score: 120, level: 4 }));
        }
        _ => panic!("expected the summary screen"),
    }
    assert!(h.transport.is_closed());
}

#[test]
fn test_enter_key_sends_player_action() {
    let mut h = harness();
    h.app.start(Some(&game_started().encode().unwrap()));

    h.app.handle_event(key(KeyCode::Enter));

    let sent = h.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        Event::decode(&sent[0]).unwrap(),
        Event::player_action(UiElement::new(1, ElementType::Button, "Jump"))
    );
}

#[test]
fn test_logs_toggle_and_quit() {
    let mut h = harness();
    h.app.start(None);

    h.app.handle_event(key(KeyCode::Char('G')));
    assert!(h.app.is_showing_logs());

    // Keys go to the logs panel while it is open
    h.app.handle_event(key(KeyCode::Char('q')));
    assert!(!h.app.should_quit());

    h.app.handle_event(key(KeyCode::Esc));
    assert!(!h.app.is_showing_logs());

    h.app.handle_event(key(KeyCode::Char('q')));
    assert!(h.app.should_quit());
}

#[test]
fn test_shutdown_closes_transport() {
    let mut h = harness();
    h.app.start(Some(&game_started().encode().unwrap()));

    h.app.shutdown();

    assert!(h.transport.is_closed());
}
