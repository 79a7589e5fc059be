//! Stderr tracing for debug builds, switched on by `BCH_DEBUG`
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    cfg!(debug_assertions)
        && *DEBUG_ENABLED.get_or_init(|| std::env::var_os("BCH_DEBUG").is_some())
}

macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::debug::debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use debug_log;
