use partyplay::protocol::{ElementType, Event, UiElement};
use partyplay::ui::generator::{ControlPanel, Lane};

fn button(id: u32, content: &str) -> UiElement {
    UiElement::new(id, ElementType::Button, content)
}

fn switch(id: u32, content: &str) -> UiElement {
    UiElement::new(id, ElementType::Switch, content)
}

fn shake(id: u32) -> UiElement {
    UiElement::new(id, ElementType::Shake, "Shake!")
}

fn ids<'a>(controls: impl Iterator<Item = &'a partyplay::ui::generator::Control>) -> Vec<u32> {
    controls.map(|control| control.id()).collect()
}

#[test]
fn test_example_level_layout_and_action() {
    let elements = vec![button(1, "Jump"), switch(2, "Shield")];
    let mut panel = ControlPanel::new();
    panel.generate(&elements);

    assert_eq!(panel.control(1).unwrap().lane(), Lane::B);
    assert_eq!(panel.control(2).unwrap().lane(), Lane::A);

    let action = panel.activate(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(&action.encode().unwrap()).unwrap();
    assert_eq!(json["type"], "PLAYER_ACTION");
    assert_eq!(json["elementRef"]["id"], 1);
    assert_eq!(json["elementRef"]["content"], "Jump");
}

#[test]
fn test_one_control_per_non_shake_element() {
    let elements = vec![button(1, "A"), shake(2), switch(3, "C"), shake(4), button(5, "E")];
    let mut panel = ControlPanel::new();
    panel.generate(&elements);

    assert_eq!(ids(panel.controls().iter()), vec![1, 3, 5]);
    assert_eq!(panel.shake_listener_count(), 2);
    assert!(panel.control(2).is_none());
}

#[test]
fn test_lane_follows_index_parity_only() {
    // Shake elements still take an index
    let elements = vec![switch(10, "x"), shake(11), button(12, "y"), button(13, "z"), switch(14, "w")];
    let mut panel = ControlPanel::new();
    panel.generate(&elements);

    assert_eq!(ids(panel.lane(Lane::B)), vec![10, 12, 14]);
    assert_eq!(ids(panel.lane(Lane::A)), vec![13]);

    for index in 0..8 {
        let expected = if index % 2 == 0 { Lane::B } else { Lane::A };
        assert_eq!(Lane::for_index(index), expected);
    }
}

#[test]
fn test_activation_emits_unmodified_descriptor() {
    let element = switch(7, "Lights");
    let mut panel = ControlPanel::new();
    panel.generate(&[element.clone()]);
    assert_eq!(panel.control(7).unwrap().element(), &element);

    let first = panel.activate(7).unwrap();
    assert_eq!(first, Event::PlayerAction { element_ref: element.clone() });
    assert!(panel.control(7).unwrap().is_on());

    // Toggling back still sends the same descriptor
    let second = panel.activate(7).unwrap();
    assert_eq!(second, Event::player_action(element));
    assert!(!panel.control(7).unwrap().is_on());
}

#[test]
fn test_buttons_have_no_on_state() {
    let mut panel = ControlPanel::new();
    panel.generate(&[button(1, "Jump")]);
    panel.activate(1);
    assert!(!panel.control(1).unwrap().is_on());
}

#[test]
fn test_activating_unknown_id_emits_nothing() {
    let mut panel = ControlPanel::new();
    panel.generate(&[button(1, "Jump")]);
    assert!(panel.activate(99).is_none());
}

#[test]
fn test_generate_replaces_previous_controls() {
    let mut panel = ControlPanel::new();
    panel.generate(&[button(1, "Jump"), shake(2), switch(3, "Shield")]);
    panel.generate(&[button(4, "Duck")]);

    assert_eq!(ids(panel.controls().iter()), vec![4]);
    assert_eq!(panel.shake_listener_count(), 0);
    assert!(panel.activate(1).is_none());
    assert_eq!(panel.focused().map(|control| control.id()), Some(4));
}

#[test]
fn test_shake_emits_one_action_per_listener() {
    let first = shake(2);
    let second = UiElement::new(5, ElementType::Shake, "Shake harder");
    let mut panel = ControlPanel::new();
    panel.generate(&[button(1, "Jump"), first.clone(), second.clone()]);

    let actions = panel.trigger_shake();
    assert_eq!(actions, vec![Event::player_action(first), Event::player_action(second)]);
}

#[test]
fn test_shake_without_listeners_emits_nothing() {
    let mut panel = ControlPanel::new();
    panel.generate(&[button(1, "Jump")]);
    assert!(panel.trigger_shake().is_empty());
}

#[test]
fn test_empty_level() {
    let mut panel = ControlPanel::new();
    panel.generate(&[]);
    assert!(panel.is_empty());
    assert!(panel.focused().is_none());
}
