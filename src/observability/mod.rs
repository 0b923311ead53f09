//! Observability for todosvc.
//!
//! Structured JSON logging of lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::log_stderr(Severity::Fatal, event.as_str(), fields);
    } else {
        Logger::log(Severity::Info, event.as_str(), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::BootStart);
        log_event(Event::BootFailed);
    }

    #[test]
    fn test_log_event_with_fields_does_not_panic() {
        log_event_with_fields(Event::DataLoaded, &[("todos", "300")]);
    }
}
