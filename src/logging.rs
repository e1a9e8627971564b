//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events. Hosts that want them on stderr
//! call [`init_logging`] once at startup; later calls are no-ops.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a formatted stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when set. Returns false
/// when logging was already initialized, by this function or by the host.
pub fn init_logging(default_filter: &str) -> bool {
    let mut installed = false;
    LOGGING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok();
    });
    installed
}

/// Whether [`init_logging`] has already run in this process.
pub fn is_initialized() -> bool {
    LOGGING.get().is_some()
}
