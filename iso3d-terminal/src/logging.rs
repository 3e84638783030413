/// Logger setup for the terminal binary
use std::sync::Once;

/// `env_filter` takes `env_logger` filter directives, e.g.
/// "iso3d_core=trace,iso3d_terminal=info". `RUST_LOG` is the fallback.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    fn filters(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filters() {
            Some(filters) => {
                builder.parse_filters(&filters);
            }
            // warnings only, the frame loop owns the screen
            None => {
                builder.filter_level(log::LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style).init();
        log::debug!("logger ready");
    });
}
