use crate::protocol::Event;

/// Messages flowing through the UI loop.
///
/// Key handlers, the countdown ticker and the navigator all produce
/// actions; the app component consumes them on the UI task.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Game input
    ActivateControl(u32),
    Shake,

    // Server traffic, already decoded
    Inbound(Event),

    // Countdown
    CountdownTick { generation: u64, remaining: u32 },

    // Navigation
    ShowSummary(String),
    ToggleLogs,

    // App control
    Quit,
    None,
}
