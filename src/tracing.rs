//! Tracing setup
//!
//! Everything this crate logs goes to one of three targets:
//! - `panel` - resize sessions, fold toggles, width changes
//! - `pointer` - listener subscribe/unsubscribe (trace level)
//! - `message` - update dispatch (debug builds)
//!
//! Console output follows `RUST_LOG` (e.g. `RUST_LOG=panel=debug`) and defaults
//! to warnings. A debug log of the three targets is also kept in
//! `~/.config/sidebar-layout/logs/sidebar-layout.log`, rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const CONSOLE_DEFAULT: &str = "warn";
const FILE_DIRECTIVES: &str = "warn,sidebar_layout=info,panel=debug,pointer=debug,message=debug";
const LOG_FILE: &str = "sidebar-layout.log";

/// Install the console layer, plus the file layer when the logs dir is writable
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONSOLE_DEFAULT));
    let console_layer = fmt::layer().with_target(true).with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map(|logs_dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new(FILE_DIRECTIVES))
        })
        .map_err(|e| eprintln!("Warning: file logging disabled: {:#}", e))
        .ok();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
