//! Reusable UI components

pub mod common;
pub mod instruction_bar;
pub mod lane_view;
pub mod lobby_component;
pub mod logs_panel;
pub mod status_bar;
pub mod summary_component;

// Component exports
pub use instruction_bar::InstructionBar;
pub use lane_view::LaneView;
pub use lobby_component::LobbyComponent;
pub use logs_panel::LogsPanel;
pub use status_bar::{ConnectionStatus, StatusBar};
pub use summary_component::SummaryComponent;
