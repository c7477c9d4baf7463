//! The tick reporter.

use crate::message::{HostCommand, TickNotification};
use crate::sink::HostSink;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Notification cadence (~8 per second; responsive without being CPU
/// heavy).
pub const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Bridges a one-shot start command into a recurring elapsed-time
/// notification stream.
///
/// Session state is owned by the reporter instance; two reporters on one
/// runtime never share anything. The recurring cycle is the owned
/// [`Interval`], so exactly one cycle can exist per reporter: a repeated
/// start replaces it, [`shutdown`](TickReporter::shutdown) removes it, and
/// dropping the reporter cancels it.
pub struct TickReporter<S: HostSink> {
    started_at: Option<Instant>,
    playing: bool,
    cycle: Option<Interval>,
    sink: S,
}

impl<S: HostSink> TickReporter<S> {
    /// Create an idle reporter delivering to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            started_at: None,
            playing: false,
            cycle: None,
            sink,
        }
    }

    /// Whether a session is active.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Handle one inbound host command.
    ///
    /// Only [`HostCommand::Start`] does anything: it records the session
    /// start, marks the session active, and schedules the tick cycle.
    /// Anything else is ignored without error or state change.
    pub fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::Start => self.start(),
            HostCommand::Unrecognized(value) => {
                debug!(command = %value, "ignoring unrecognized host command");
            }
        }
    }

    fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.playing = true;

        // Replacing the interval drops any previous cycle, so a repeated
        // start can never leave two timers running.
        let mut cycle = interval(TICK_INTERVAL);
        cycle.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // skip the immediate first firing; the first tick lands one full
        // period after the start command
        cycle.reset();
        self.cycle = Some(cycle);

        info!("tick session started");
    }

    /// Emit one elapsed-time notification.
    ///
    /// No-op while no session is active. Delivery is fire-and-forget: a
    /// sink failure is logged and the cycle keeps running.
    pub async fn emit_tick(&self) {
        if !self.playing {
            return;
        }
        let Some(started_at) = self.started_at else {
            return;
        };

        let elapsed = started_at.elapsed().as_secs_f64();
        if let Err(err) = self.sink.deliver(TickNotification::new(elapsed)).await {
            warn!("failed to deliver tick: {err}");
        }
    }

    /// Tear the session down: cancel the cycle and clear session state.
    pub fn shutdown(&mut self) {
        self.cycle = None;
        self.playing = false;
        self.started_at = None;
    }

    /// Drive the reporter until the command channel closes.
    ///
    /// One task services both the command channel and the tick cycle, so
    /// session state needs no locking. The reporter shuts down when every
    /// command sender is dropped.
    pub async fn run(mut self, mut commands: mpsc::Receiver<HostCommand>) {
        loop {
            let command = if let Some(cycle) = self.cycle.as_mut() {
                tokio::select! {
                    maybe = commands.recv() => match maybe {
                        Some(command) => Some(command),
                        None => break,
                    },
                    _ = cycle.tick() => None,
                }
            } else {
                match commands.recv().await {
                    Some(command) => Some(command),
                    None => break,
                }
            };

            match command {
                Some(command) => self.handle_command(command),
                None => self.emit_tick().await,
            }
        }
        self.shutdown();
    }
}
