//! crates/logging/src/tracing_bridge.rs
//! Bridge between the debug flag system and the tracing crate.
//!
//! Events recorded through [`crate::debug_log!`] are re-emitted as
//! `tracing::debug!` events so applications that already install a
//! subscriber see traversal diagnostics alongside their own. Each flag maps
//! to a dedicated target below `walk::`, which lets `EnvFilter` directives
//! such as `walk::enter=debug` select categories.
//!
//! ```rust,ignore
//! use logging::{init_tracing, VerbosityConfig};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! ```

use super::config::VerbosityConfig;
use super::levels::DebugFlag;
use super::thread_local::{capture_events, init};
use tracing_subscriber::EnvFilter;

/// Returns the tracing target used for a flag.
#[must_use]
pub const fn target_for_flag(flag: DebugFlag) -> &'static str {
    match flag {
        DebugFlag::Walk => "walk::walk",
        DebugFlag::Enter => "walk::enter",
        DebugFlag::Depth => "walk::depth",
        DebugFlag::Queue => "walk::queue",
        DebugFlag::Own => "walk::own",
        DebugFlag::Io => "walk::io",
    }
}

/// Maps a tracing target back to the flag that produced it.
#[must_use]
pub fn flag_for_target(target: &str) -> Option<DebugFlag> {
    DebugFlag::ALL
        .into_iter()
        .find(|flag| target_for_flag(*flag) == target)
}

pub(crate) fn forward(flag: DebugFlag, level: u8, message: &str) {
    // Targets must be literals for the tracing macros.
    match flag {
        DebugFlag::Walk => tracing::debug!(target: "walk::walk", verbosity = level, "{message}"),
        DebugFlag::Enter => tracing::debug!(target: "walk::enter", verbosity = level, "{message}"),
        DebugFlag::Depth => tracing::debug!(target: "walk::depth", verbosity = level, "{message}"),
        DebugFlag::Queue => tracing::debug!(target: "walk::queue", verbosity = level, "{message}"),
        DebugFlag::Own => tracing::debug!(target: "walk::own", verbosity = level, "{message}"),
        DebugFlag::Io => tracing::debug!(target: "walk::io", verbosity = level, "{message}"),
    }
}

/// Installs the verbosity configuration for this thread and a global fmt
/// subscriber filtered by `RUST_LOG` (defaulting to `walk=debug`).
///
/// Event capture for [`drain_events`](crate::drain_events) is switched off
/// on this thread, so diagnostics reach the subscriber only.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    init(config);
    capture_events(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("walk=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
