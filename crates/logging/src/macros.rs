//! crates/logging/src/macros.rs
//! Level-gated diagnostic macros.

/// Records a debug diagnostic when the flag's level is at or above `level`.
///
/// The message is only formatted when the check passes, so disabled
/// categories cost a thread-local lookup and nothing else.
///
/// ```
/// use logging::{debug_log, drain_events, init, VerbosityConfig};
///
/// let mut config = VerbosityConfig::default();
/// config.debug.enter = 2;
/// init(config);
///
/// debug_log!(Enter, 2, "entering {}", "/tmp");
/// debug_log!(Enter, 3, "suppressed");
///
/// let events = drain_events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].message(), "entering /tmp");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let level: u8 = $level;
        if $crate::debug_gte($crate::DebugFlag::$flag, level) {
            $crate::emit_debug($crate::DebugFlag::$flag, level, ::std::format!($($arg)+));
        }
    }};
}
