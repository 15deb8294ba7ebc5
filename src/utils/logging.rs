//! Module-gated logging macros.
//!
//! Every module that logs declares its own switch and then calls the macros
//! exported at the crate root:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_warn};
//!
//! log_debug!("[probe] scanning for {}", name);
//! ```
//! Output goes through the `log` facade, so `RUST_LOG` still decides what
//! actually reaches stderr.

/// Debug-level record, emitted only when the calling module's
/// `ENABLE_LOGS` is `true`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Warn-level record, gated the same way as [`log_debug!`]. Used for
/// failures that are swallowed and replaced with a fallback value.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}
