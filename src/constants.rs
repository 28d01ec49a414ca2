//! Constants used throughout the application
//!
//! This module centralizes UI text, defaults, and validation bounds.

// Connection defaults
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8080/game";

// Countdown bounds in seconds
pub const COUNTDOWN_DEFAULT_SECONDS: u32 = 10;
pub const COUNTDOWN_MIN_SECONDS: u32 = 1;
pub const COUNTDOWN_MAX_SECONDS: u32 = 600;

// Shake gesture defaults
/// Keys the game screen already binds, so they cannot be the shake key
pub const RESERVED_KEYS: &[char] = &['q', 'G', 'h', 'j', 'k', 'l', ' '];
pub const SHAKE_DEFAULT_KEY: &str = "s";
pub const SHAKE_DEFAULT_PRESSES: u32 = 3;
pub const SHAKE_MIN_PRESSES: u32 = 2;
pub const SHAKE_MAX_PRESSES: u32 = 10;
pub const SHAKE_DEFAULT_WINDOW_MS: u64 = 800;
pub const SHAKE_MIN_WINDOW_MS: u64 = 100;
pub const SHAKE_MAX_WINDOW_MS: u64 = 5000;

/// Number of log lines kept in memory for the logs panel
pub const LOG_BUFFER_CAPACITY: usize = 500;

// Lane titles
pub const LANE_A_TITLE: &str = " Lane A ";
pub const LANE_B_TITLE: &str = " Lane B ";

// Screen text
pub const TITLE_LOBBY: &str = "🎮 Lobby";
pub const TITLE_GAME_OVER: &str = "🏁 Game Over";
pub const TITLE_LOGS: &str = "🔍 Logs - press 'G' or Esc to close";
pub const INSTRUCTION_PLACEHOLDER: &str = "Waiting for instructions...";
pub const LOBBY_WAITING: &str = "Waiting for the game to start...";

// Status bar
pub const STATUS_CONNECTING: &str = "🔄 Connecting...";
pub const STATUS_CONNECTED: &str = "🟢 Connected";
pub const STATUS_DISCONNECTED: &str = "🔴 Disconnected";
pub const STATUS_SHORTCUTS: &str = "←/→ lane • ↑/↓ select • Enter: activate • G: logs • q: quit";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
