//! Builds the on-screen controls for a level.
//!
//! Controls alternate between two lanes by index: even indices go to lane B,
//! odd indices to lane A. `SHAKE` descriptors create no control; each one
//! arms a shake listener instead. Every activation yields exactly one
//! `PLAYER_ACTION` carrying the descriptor as it was received.

use crate::protocol::{ElementType, Event, UiElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    A,
    B,
}

impl Lane {
    /// Placement for the element at `index` in the level's list
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Lane::B
        } else {
            Lane::A
        }
    }
}

/// An interactive control generated from a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    element: UiElement,
    lane: Lane,
    switched_on: bool,
}

impl Control {
    pub fn id(&self) -> u32 {
        self.element.id
    }

    pub fn label(&self) -> &str {
        &self.element.content
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn element(&self) -> &UiElement {
        &self.element
    }

    pub fn is_switch(&self) -> bool {
        self.element.kind == ElementType::Switch
    }

    /// Display state of a switch; always false for buttons
    pub fn is_on(&self) -> bool {
        self.switched_on
    }
}

#[derive(Debug, Default)]
pub struct ControlPanel {
    /// Controls in generation order
    controls: Vec<Control>,
    shake_listeners: Vec<UiElement>,
    focused: Option<usize>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current controls with ones built from `elements`
    pub fn generate(&mut self, elements: &[UiElement]) {
        self.controls.clear();
        self.shake_listeners.clear();

        for (index, element) in elements.iter().enumerate() {
            if element.is_shake() {
                log::debug!("Panel: arming shake listener for element {}", element.id);
                self.shake_listeners.push(element.clone());
                continue;
            }
            self.controls.push(Control {
                element: element.clone(),
                lane: Lane::for_index(index),
                switched_on: false,
            });
        }

        self.focused = if self.controls.is_empty() { None } else { Some(0) };
        log::info!(
            "Panel: generated {} controls and {} shake listeners",
            self.controls.len(),
            self.shake_listeners.len()
        );
    }

    /// Activate the control with `id`, returning its outbound action
    pub fn activate(&mut self, id: u32) -> Option<Event> {
        let control = self.controls.iter_mut().find(|control| control.id() == id)?;
        if control.is_switch() {
            control.switched_on = !control.switched_on;
        }
        Some(Event::player_action(control.element.clone()))
    }

    /// One outbound action per armed shake listener
    pub fn trigger_shake(&self) -> Vec<Event> {
        self.shake_listeners
            .iter()
            .cloned()
            .map(Event::player_action)
            .collect()
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn lane(&self, lane: Lane) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(move |control| control.lane == lane)
    }

    pub fn control(&self, id: u32) -> Option<&Control> {
        self.controls.iter().find(|control| control.id() == id)
    }

    pub fn shake_listener_count(&self) -> usize {
        self.shake_listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty() && self.shake_listeners.is_empty()
    }

    pub fn focused(&self) -> Option<&Control> {
        self.focused.and_then(|index| self.controls.get(index))
    }

    pub fn focus_next(&mut self) {
        if let Some(index) = self.focused {
            self.focused = Some((index + 1) % self.controls.len());
        }
    }

    pub fn focus_previous(&mut self) {
        if let Some(index) = self.focused {
            let len = self.controls.len();
            self.focused = Some((index + len - 1) % len);
        }
    }

    /// Move focus to the neighbouring control in the other lane, if any
    pub fn focus_other_lane(&mut self) {
        let Some(index) = self.focused else {
            return;
        };
        let current_lane = self.controls[index].lane;
        let row = self.lane_position(index);
        let target = self
            .controls
            .iter()
            .enumerate()
            .filter(|(_, control)| control.lane != current_lane)
            .map(|(i, _)| i)
            .take(row + 1)
            .last();
        if let Some(target) = target {
            self.focused = Some(target);
        }
    }

    fn lane_position(&self, index: usize) -> usize {
        let lane = self.controls[index].lane;
        self.controls[..index].iter().filter(|control| control.lane == lane).count()
    }
}
