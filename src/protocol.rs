//! Wire protocol shared with the game server
//!
//! Every message is a JSON object whose `type` field names the event. Field
//! names are camelCase, type tags are SCREAMING_SNAKE_CASE:
//!
//! ```json
//! {"type": "NEXT_ACTION", "sentence": "Press Jump!", "time": 5}
//! {"type": "PLAYER_ACTION", "elementRef": {"id": 1, "type": "BUTTON", "content": "Jump"}}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding or encoding protocol messages
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty payload")]
    Empty,
    #[error("malformed event: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Kind of control a server asks the client to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    Button,
    Switch,
    /// No visible control, only a gesture listener
    Shake,
}

/// Descriptor for one control of the current level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiElement {
    /// Unique within a level, used to correlate input with controls
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub content: String,
}

impl UiElement {
    pub fn new(id: u32, kind: ElementType, content: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
        }
    }

    pub fn is_shake(&self) -> bool {
        self.kind == ElementType::Shake
    }
}

/// Messages exchanged with the game server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    GameStarted {
        #[serde(rename = "uiElements")]
        ui_elements: Vec<UiElement>,
    },
    NextLevel {
        #[serde(rename = "uiElements")]
        ui_elements: Vec<UiElement>,
    },
    NextAction {
        sentence: String,
        /// Countdown length in seconds; the configured default applies when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<u32>,
    },
    GameOver {
        score: i64,
        level: u32,
    },
    PlayerAction {
        #[serde(rename = "elementRef")]
        element_ref: UiElement,
    },
    /// Any event type this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl Event {
    /// Decode one inbound message
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ProtocolError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the outbound action for an activated control
    pub fn player_action(element: UiElement) -> Self {
        Event::PlayerAction { element_ref: element }
    }

    /// Wire discriminant, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Event::GameStarted { .. } => "GAME_STARTED",
            Event::NextLevel { .. } => "NEXT_LEVEL",
            Event::NextAction { .. } => "NEXT_ACTION",
            Event::GameOver { .. } => "GAME_OVER",
            Event::PlayerAction { .. } => "PLAYER_ACTION",
            Event::Unknown => "UNKNOWN",
        }
    }
}

/// Final result handed to the summary screen when a game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: i64,
    pub level: u32,
}

impl GameSummary {
    pub fn to_payload(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_payload(payload: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(payload)?)
    }
}
