//! Logger bootstrap for the binary.
//!
//! The library only emits through the `log` facade; this is where a backend gets
//! attached. `RUST_LOG` takes precedence over the level picked from `--verbose`.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use zettelapp::error::{Result, ZettelError};

pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Starts logging to stderr. The returned handle must stay alive for the run.
pub fn init(verbose: bool) -> Result<LoggerHandle> {
    let level = default_level(verbose);
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|err| ZettelError::Api(format!("invalid log level `{}`: {}", level, err)))?
        .log_to_stderr()
        .start()
        .map_err(|err| ZettelError::Api(format!("failed to start logger: {}", err)))?;

    debug!(
        "event=cli_start module=cli status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
