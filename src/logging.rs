use std::fmt::Display;

use env_logger::Env;
use log::error;

/// Logs to stderr, `warn` and up unless `RUST_LOG` says otherwise.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

pub fn log_error<E: Display>(fallible: Result<(), E>, message: &str) {
    if let Err(err) = fallible {
        error!("{message}: {err}");
    }
}
