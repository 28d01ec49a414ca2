//! partyplay - a terminal client for server-driven party games
//!
//! The server decides which controls each player sees and what they should
//! do; this client renders those controls, forwards every activation back to
//! the server, and follows the server through levels until the game ends.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`protocol`] - Wire events exchanged with the game server
//! * [`transport`] - Connection to the server
//! * [`ui`] - Screens, event routing and rendering

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Wire protocol shared with the game server
pub mod protocol;

/// Transport boundary and its WebSocket implementation
pub mod transport;

/// Terminal user interface components and rendering
pub mod ui;
