//! Lifecycle events.

/// A named lifecycle event.
///
/// Events are logged once each at the point they occur; none of them is
/// emitted on the per-request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Process boot began
    BootStart,
    /// Configuration resolved (file or defaults)
    ConfigLoaded,
    /// Todo data file loaded into the store
    DataLoaded,
    /// HTTP server about to enter its accept loop
    ServeStart,
    /// Boot aborted; process exits
    BootFailed,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DataLoaded => "DATA_LOADED",
            Event::ServeStart => "SERVE_START",
            Event::BootFailed => "BOOT_FAILED",
        }
    }

    /// Whether this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}
