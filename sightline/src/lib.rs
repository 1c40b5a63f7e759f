pub mod detect;
pub mod session;

#[cfg(test)]
mod debug;

use tracing_subscriber::filter::LevelFilter;

/// Installs a verbose fmt subscriber for test flows, tolerating repeat
/// calls from parallel tests.
pub fn log_init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
