//! Per-screen countdown.
//!
//! A single ticker task emits [`Action::CountdownTick`] once per second.
//! Starting a new countdown aborts the running ticker and bumps the
//! generation, and [`Countdown::accept`] rejects ticks from any older
//! generation that were already queued. A screen therefore never observes
//! two tick streams at once.

use super::actions::Action;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

pub struct Countdown {
    action_tx: mpsc::UnboundedSender<Action>,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            action_tx,
            generation: 0,
            handle: None,
        }
    }

    /// Cancel any running countdown and start a new one from `seconds`.
    /// Must be called inside a tokio runtime.
    pub fn start(&mut self, seconds: u32) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let action_tx = self.action_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            for remaining in (0..=seconds).rev() {
                ticker.tick().await;
                if action_tx.send(Action::CountdownTick { generation, remaining }).is_err() {
                    break;
                }
            }
        }));

        generation
    }

    /// Whether a tick with this generation belongs to the live countdown
    pub fn accept(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
