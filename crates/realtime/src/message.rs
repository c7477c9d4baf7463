//! Host protocol messages.

use serde::{Deserialize, Serialize};

/// The wire value a host sends to begin a session.
pub const START_COMMAND: &str = "start_timer";

/// Tag identifying elapsed-time notifications.
pub const TICK_KIND: &str = "realtime_tick";

/// A command received from the hosting context.
///
/// Only [`HostCommand::Start`] has any effect; everything else is kept
/// around for logging and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Begin (or restart) the tick session
    Start,
    /// Any other command value; ignored without error
    Unrecognized(String),
}

impl HostCommand {
    /// Parse a raw command value from the host.
    pub fn parse(raw: &str) -> Self {
        if raw == START_COMMAND {
            HostCommand::Start
        } else {
            HostCommand::Unrecognized(raw.to_string())
        }
    }
}

/// One elapsed-time notification delivered to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickNotification {
    /// Marks the message as widget-originated for the host's dispatcher
    pub marker: bool,

    /// Always [`TICK_KIND`]
    pub kind: String,

    /// Seconds since the session started (fractional)
    pub elapsed: f64,
}

impl TickNotification {
    /// Create a tick notification for the given elapsed seconds.
    pub fn new(elapsed: f64) -> Self {
        Self {
            marker: true,
            kind: TICK_KIND.to_string(),
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_sentinel() {
        assert_eq!(HostCommand::parse("start_timer"), HostCommand::Start);
    }

    #[test]
    fn test_parse_anything_else_is_unrecognized() {
        assert_eq!(
            HostCommand::parse("stop_timer"),
            HostCommand::Unrecognized("stop_timer".to_string())
        );
        assert_eq!(
            HostCommand::parse(""),
            HostCommand::Unrecognized(String::new())
        );
    }

    #[test]
    fn test_notification_wire_format() {
        let notification = TickNotification::new(0.12);
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "marker": true,
                "kind": "realtime_tick",
                "elapsed": 0.12,
            })
        );
    }
}
