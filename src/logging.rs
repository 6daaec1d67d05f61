use env_logger::{Builder, Env, WriteStyle};

use crate::config::Config;

/// Installs the global logger. `RUST_LOG` still wins over the configured
/// level when it is set.
pub fn init(config: &Config) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()));

    if config.is_production() {
        builder
            .write_style(WriteStyle::Never)
            .format_timestamp_millis();
    }

    builder.init();
}
