#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system used by the traversal crates.
//! Diagnostics are grouped into [`DebugFlag`] categories, each with its own
//! numeric level, so callers can ask for detailed output about one concern
//! (for example directory entry) without drowning in per-entry noise.
//!
//! # Design
//!
//! - [`VerbosityConfig`] stores one level per flag. It is built from a
//!   `-v` style count with [`VerbosityConfig::from_verbose_level`] or from
//!   `NAME[LEVEL]` tokens with [`VerbosityConfig::apply_debug_flag`].
//! - The active configuration lives in thread-local storage ([`init`]), since
//!   traversal is single threaded and every walker runs on its caller's
//!   thread.
//! - [`debug_log!`] checks the level and records a [`DiagnosticEvent`] into a
//!   thread-local buffer that tests and front ends collect with
//!   [`drain_events`]. Buffering can be switched off per thread with
//!   [`capture_events`].
//! - With the `tracing` feature every recorded event is also re-emitted
//!   through `tracing` under a `walk::<flag>` target.
//!
//! # Examples
//!
//! ```
//! use logging::{debug_gte, init, DebugFlag, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flag("queue3").unwrap();
//! init(config);
//!
//! assert!(debug_gte(DebugFlag::Walk, 1));
//! assert!(debug_gte(DebugFlag::Queue, 3));
//! assert!(!debug_gte(DebugFlag::Own, 1));
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, capture_events, capturing_events, current_config, debug_gte,
    drain_events, emit_debug, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{flag_for_target, init_tracing, target_for_flag};
