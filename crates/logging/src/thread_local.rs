//! crates/logging/src/thread_local.rs
//! Thread-local storage for verbosity configuration and event collection.

use super::config::VerbosityConfig;
use super::levels::DebugFlag;
use std::cell::{Cell, RefCell};

thread_local! {
    static VERBOSITY: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = RefCell::new(Vec::new());
    static CAPTURE: Cell<bool> = const { Cell::new(true) };
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Debug-level diagnostic event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the rendered message regardless of event kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Debug { message, .. } => message,
        }
    }
}

/// Initialize verbosity configuration for the current thread.
pub fn init(config: VerbosityConfig) {
    VERBOSITY.with(|v| {
        *v.borrow_mut() = config;
    });
}

/// Returns a copy of the verbosity configuration active on this thread.
pub fn current_config() -> VerbosityConfig {
    VERBOSITY.with(|v| v.borrow().clone())
}

/// Check if the debug flag is at or above the specified level.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().debug.get(flag) >= level)
}

/// Enables or disables buffering of events for [`drain_events`] on this thread.
///
/// Capture is on by default. Disabling it discards anything already buffered.
/// `init_tracing` disables it so long walks do not accumulate messages that
/// the subscriber has already received.
pub fn capture_events(enabled: bool) {
    CAPTURE.with(|c| c.set(enabled));
    if !enabled {
        EVENTS.with(|e| e.borrow_mut().clear());
    }
}

/// Reports whether events are buffered on this thread.
pub fn capturing_events() -> bool {
    CAPTURE.with(Cell::get)
}

/// Emit a debug diagnostic event.
///
/// With the `tracing` feature the event is forwarded to the active `tracing`
/// subscriber. It is buffered for [`drain_events`] only while capture is
/// enabled.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    #[cfg(feature = "tracing")]
    super::tracing_bridge::forward(flag, level, &message);

    if !capturing_events() {
        return;
    }
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Apply a debug flag token to the current configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_debug_flag(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_check() {
        let mut config = VerbosityConfig::default();
        config.debug.walk = 2;
        config.debug.own = 3;

        init(config);

        assert!(debug_gte(DebugFlag::Walk, 1));
        assert!(debug_gte(DebugFlag::Walk, 2));
        assert!(!debug_gte(DebugFlag::Walk, 3));

        assert!(debug_gte(DebugFlag::Own, 3));
        assert!(!debug_gte(DebugFlag::Own, 4));
        assert!(!debug_gte(DebugFlag::Queue, 1));
    }

    #[test]
    fn test_emit_and_drain() {
        init(VerbosityConfig::default());
        drain_events();

        emit_debug(DebugFlag::Enter, 1, "entering".to_string());
        emit_debug(DebugFlag::Io, 2, "failed".to_string());

        let events = drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message(), "entering");
        assert!(drain_events().is_empty());
    }

    #[test]
    fn test_disabled_capture_buffers_nothing() {
        init(VerbosityConfig::default());
        emit_debug(DebugFlag::Walk, 0, "kept until disabled".to_string());

        capture_events(false);
        assert!(!capturing_events());
        for i in 0..1000 {
            emit_debug(DebugFlag::Walk, 0, format!("visiting {i}"));
        }
        assert!(drain_events().is_empty());

        capture_events(true);
        emit_debug(DebugFlag::Walk, 0, "captured".to_string());
        assert_eq!(drain_events().len(), 1);
    }

    #[test]
    fn test_apply_debug_flag_updates_thread_config() {
        init(VerbosityConfig::default());
        apply_debug_flag("depth2").unwrap();
        assert_eq!(current_config().debug.depth, 2);
        assert!(apply_debug_flag("nope").is_err());
    }
}
