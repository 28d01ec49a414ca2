//! Hand-off from the game screen to whatever shows the final result.

use super::core::Action;
use tokio::sync::mpsc;

pub trait Navigator {
    /// Called once when the game ends, with the serialized `GameSummary`
    fn show_summary(&mut self, payload: String);
}

/// Navigator that asks the app loop to switch to the summary screen
pub struct ActionNavigator {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl ActionNavigator {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }
}

impl Navigator for ActionNavigator {
    fn show_summary(&mut self, payload: String) {
        if self.action_tx.send(Action::ShowSummary(payload)).is_err() {
            log::warn!("Navigation: app loop is gone, summary not shown");
        }
    }
}
