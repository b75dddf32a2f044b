/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// The log level is taken from the `LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn`, `error`), defaulting to `info`.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = match std::env::var("LOGLEVEL")
            .unwrap_or_else(|_| String::from("info"))
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
    });
}
