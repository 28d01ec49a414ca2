use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use partyplay::protocol::{ElementType, Event, GameSummary, UiElement};
use partyplay::transport::{MemoryTransport, Transport};
use partyplay::ui::core::{Action, Component};
use partyplay::ui::navigation::ActionNavigator;
use partyplay::ui::{GameScreen, GameSettings, Phase, SendOutcome};
use tokio::sync::mpsc;

type Screen = GameScreen<MemoryTransport, ActionNavigator>;

fn new_screen(transport: &MemoryTransport) -> (Screen, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let screen = GameScreen::new(
        transport.clone(),
        ActionNavigator::new(tx.clone()),
        tx,
        GameSettings::default(),
    );
    (screen, rx)
}

fn jump() -> UiElement {
    UiElement::new(1, ElementType::Button, "Jump")
}

fn shield() -> UiElement {
    UiElement::new(2, ElementType::Switch, "Shield")
}

fn bootstrap(elements: Vec<UiElement>) -> String {
    Event::GameStarted { ui_elements: elements }.encode().unwrap()
}

fn started_screen(transport: &MemoryTransport) -> (Screen, mpsc::UnboundedReceiver<Action>) {
    let (mut screen, rx) = new_screen(transport);
    assert!(screen.enter(Some(&bootstrap(vec![jump(), shield()]))));
    (screen, rx)
}

fn control_ids(screen: &Screen) -> Vec<u32> {
    screen.panel().controls().iter().map(|control| control.id()).collect()
}

fn summaries(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<String> {
    let mut payloads = Vec::new();
    while let Ok(action) = rx.try_recv() {
        if let Action::ShowSummary(payload) = action {
            payloads.push(payload);
        }
    }
    payloads
}

#[test]
fn test_bootstrap_renders_without_transport() {
    let transport = MemoryTransport::disconnected();
    let (screen, _rx) = started_screen(&transport);

    assert_eq!(screen.phase(), &Phase::Active);
    assert_eq!(control_ids(&screen), vec![1, 2]);
    assert_eq!(screen.level(), 1);
    assert!(transport.sent().is_empty());
}

#[test]
fn test_malformed_bootstrap_leaves_screen_empty() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = new_screen(&transport);

    assert!(!screen.enter(Some("{\"type\": \"GAME_STARTED\"")));
    assert_eq!(screen.phase(), &Phase::WaitingForStart);
    assert!(screen.panel().is_empty());
}

#[test]
fn test_missing_bootstrap_leaves_screen_empty() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = new_screen(&transport);

    assert!(!screen.enter(None));
    assert_eq!(screen.phase(), &Phase::WaitingForStart);
}

#[test]
fn test_bootstrap_must_be_game_started() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = new_screen(&transport);
    let payload = Event::GameOver { score: 1, level: 1 }.encode().unwrap();

    assert!(!screen.enter(Some(&payload)));
    assert_eq!(screen.phase(), &Phase::WaitingForStart);
    assert!(!transport.is_closed());
}

#[tokio::test]
async fn test_next_action_updates_only_instruction() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    screen.route(Event::NextAction {
        sentence: "Press Jump!".to_string(),
        time: Some(5),
    });

    assert_eq!(screen.instruction(), Some("Press Jump!"));
    assert_eq!(screen.remaining_seconds(), Some(5));
    assert!(screen.countdown().is_running());
    assert_eq!(control_ids(&screen), vec![1, 2]);
    assert_eq!(screen.level(), 1);
}

#[tokio::test]
async fn test_next_action_without_time_uses_default() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    screen.route(Event::NextAction {
        sentence: "Flip the Shield".to_string(),
        time: None,
    });

    assert_eq!(screen.remaining_seconds(), Some(GameSettings::default().default_countdown_seconds));
}

#[tokio::test]
async fn test_next_level_replaces_controls_and_keeps_instruction() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);
    screen.route(Event::NextAction {
        sentence: "Press Jump!".to_string(),
        time: Some(5),
    });

    screen.route(Event::NextLevel {
        ui_elements: vec![UiElement::new(9, ElementType::Button, "Duck")],
    });

    assert_eq!(control_ids(&screen), vec![9]);
    assert_eq!(screen.instruction(), Some("Press Jump!"));
    assert_eq!(screen.level(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stale_countdown_ticks_are_ignored() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    screen.route(Event::NextAction {
        sentence: "first".to_string(),
        time: Some(10),
    });
    let first = screen.countdown().generation();
    screen.route(Event::NextAction {
        sentence: "second".to_string(),
        time: Some(3),
    });
    let second = screen.countdown().generation();

    screen.on_countdown_tick(first, 7);
    assert_eq!(screen.remaining_seconds(), Some(3));

    screen.on_countdown_tick(second, 2);
    assert_eq!(screen.remaining_seconds(), Some(2));
}

#[test]
fn test_game_over_closes_transport_and_navigates_once() {
    let transport = MemoryTransport::connected();
    let (mut screen, mut rx) = started_screen(&transport);

    screen.route(Event::GameOver { score: 42, level: 3 });

    assert!(transport.is_closed());
    assert!(!transport.is_connected());
    assert_eq!(screen.phase(), &Phase::Finished(GameSummary { score: 42, level: 3 }));

    // A second GAME_OVER is ignored once finished
    screen.route(Event::GameOver { score: 0, level: 0 });

    let payloads = summaries(&mut rx);
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        GameSummary::from_payload(&payloads[0]).unwrap(),
        GameSummary { score: 42, level: 3 }
    );
}

#[test]
fn test_finished_screen_ignores_further_events() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);
    screen.route(Event::GameOver { score: 1, level: 1 });

    screen.route(Event::NextLevel {
        ui_elements: vec![UiElement::new(9, ElementType::Button, "Duck")],
    });
    screen.route(Event::NextAction {
        sentence: "too late".to_string(),
        time: Some(3),
    });

    assert_eq!(control_ids(&screen), vec![1, 2]);
    assert_eq!(screen.instruction(), None);
    assert!(screen.is_finished());
}

#[test]
fn test_unknown_and_echoed_events_change_nothing() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    screen.route(Event::Unknown);
    screen.route(Event::player_action(jump()));

    assert_eq!(screen.phase(), &Phase::Active);
    assert_eq!(control_ids(&screen), vec![1, 2]);
    assert_eq!(screen.instruction(), None);
    assert!(transport.sent().is_empty());
}

#[test]
fn test_activation_sends_one_player_action() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    assert_eq!(screen.activate(1), Some(SendOutcome::Sent));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        r#"{"type":"PLAYER_ACTION","elementRef":{"id":1,"type":"BUTTON","content":"Jump"}}"#
    );
    assert_eq!(Event::decode(&sent[0]).unwrap(), Event::player_action(jump()));
}

#[test]
fn test_activation_without_connection_is_dropped() {
    let transport = MemoryTransport::disconnected();
    let (mut screen, _rx) = started_screen(&transport);

    assert_eq!(screen.activate(2), Some(SendOutcome::Dropped));
    assert!(transport.sent().is_empty());

    // Nothing was queued for later
    transport.set_connected(true);
    assert!(transport.sent().is_empty());
}

#[test]
fn test_activation_of_missing_control() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    assert_eq!(screen.activate(42), None);
    assert!(transport.sent().is_empty());
}

#[test]
fn test_shake_sends_shake_descriptor() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = new_screen(&transport);
    let shake = UiElement::new(3, ElementType::Shake, "Shake!");
    screen.enter(Some(&bootstrap(vec![jump(), shake.clone()])));

    assert_eq!(screen.shake(), vec![SendOutcome::Sent]);
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(Event::decode(&sent[0]).unwrap(), Event::player_action(shake));
}

#[test]
fn test_enter_key_activates_focused_control() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    let action = screen.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(action, Action::ActivateControl(1));

    assert_eq!(screen.update(action), Action::None);
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn test_shake_key_presses_produce_shake_action() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);
    let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);

    assert_eq!(screen.handle_key_events(key), Action::None);
    assert_eq!(screen.handle_key_events(key), Action::None);
    assert_eq!(screen.handle_key_events(key), Action::Shake);
}

#[tokio::test]
async fn test_teardown_closes_transport_and_stops_countdown() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);
    screen.route(Event::NextAction {
        sentence: "Press Jump!".to_string(),
        time: Some(30),
    });

    screen.teardown();

    assert!(transport.is_closed());
    assert!(!screen.countdown().is_running());
}

#[test]
fn test_dropping_screen_closes_transport() {
    let transport = MemoryTransport::connected();
    {
        let _screen = started_screen(&transport);
    }
    assert!(transport.is_closed());
}

#[test]
fn test_game_started_while_active_is_ignored() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);

    screen.route(Event::GameStarted {
        ui_elements: vec![UiElement::new(7, ElementType::Button, "Duck")],
    });

    assert_eq!(screen.phase(), &Phase::Active);
    assert_eq!(control_ids(&screen), vec![1, 2]);
    assert_eq!(screen.level(), 1);
}

#[test]
fn test_actions_after_game_over_are_dropped() {
    let transport = MemoryTransport::connected();
    let (mut screen, _rx) = started_screen(&transport);
    screen.route(Event::GameOver { score: 5, level: 1 });

    // Even with a live connection nothing goes out once the game is over
    transport.set_connected(true);
    assert_eq!(screen.activate(1), Some(SendOutcome::Dropped));
    assert!(transport.sent().is_empty());
}
