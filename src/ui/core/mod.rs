//! Core UI functionality for partyplay.
//!
//! # Module Components
//!
//! - [`actions`] - Messages exchanged between components and the app loop
//! - [`component`] - Base component trait and rendering abstraction
//! - [`countdown`] - Cancel-then-restart countdown ticker
//! - [`event_handler`] - Terminal input polling

pub mod actions;
pub mod component;
pub mod countdown;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use countdown::Countdown;
pub use event_handler::{EventHandler, EventType};
