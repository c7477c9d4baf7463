//! Realtime tick reporting.
//!
//! A host sends a start command; from then on the reporter delivers an
//! elapsed-time notification back to the host every 120 ms, until the
//! reporter is shut down or the command channel closes.

#![warn(missing_docs)]

mod message;
mod reporter;
mod sink;

pub use message::{HostCommand, TickNotification, START_COMMAND, TICK_KIND};
pub use reporter::{TickReporter, TICK_INTERVAL};
pub use sink::{ChannelSink, HostSink, SinkError};
