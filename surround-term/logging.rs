//! Diagnostics go to stderr so stdout stays reserved for the edited text.
//!
//! `RUST_LOG` wins when set, e.g. `RUST_LOG=surround_lib=debug`; otherwise the
//! `log.level` config value is used.

use eyre::{
  Result,
  WrapErr,
};
use tracing_subscriber::{
  EnvFilter,
  Layer,
  fmt,
  layer::SubscriberExt,
  util::SubscriberInitExt,
};

use crate::config::LogConfig;

pub fn init(config: &LogConfig) -> Result<()> {
  let filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => {
      EnvFilter::try_new(&config.level)
        .wrap_err_with(|| format!("invalid log level '{}'", config.level))?
    },
  };

  let stderr_layer = fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(true)
    .with_line_number(true)
    .with_filter(filter);

  tracing_subscriber::registry()
    .with(stderr_layer)
    .try_init()
    .wrap_err("failed to install the log subscriber")
}
