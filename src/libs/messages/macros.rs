//! Convenience macros for application messaging and logging.
//!
//! The macros unify two output modes. In normal interactive use messages go
//! straight to the console with `println!`/`eprintln!`. When debug mode is
//! active (`KINTAI_DEBUG` or `RUST_LOG` set) the same calls route through
//! the `tracing` system instead, so diagnostic runs get structured,
//! filterable output without touching call sites.

use std::sync::OnceLock;

/// Cached debug-mode flag; environment variables are checked once.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether message output should route through `tracing`.
///
/// Debug mode is enabled by either `KINTAI_DEBUG` or the standard
/// `RUST_LOG` variable being set.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("KINTAI_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message, optionally wrapped in blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $crate::libs::messages::success($msg));
        } else {
            println!("{}", $crate::libs::messages::success($msg));
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("{}", $crate::libs::messages::error($msg));
        } else {
            eprintln!("{}", $crate::libs::messages::error($msg));
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("{}", $crate::libs::messages::warning($msg));
        } else {
            println!("{}", $crate::libs::messages::warning($msg));
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $crate::libs::messages::info($msg));
        } else {
            println!("{}", $crate::libs::messages::info($msg));
        }
    };
}

/// Emits a debug-only message through `tracing`.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!($($arg)*);
        }
    };
}

/// Creates an `anyhow::Error` from a [`Message`](crate::libs::messages::Message).
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
