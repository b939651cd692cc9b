use log::LevelFilter;

/// Initialise the global logger.
///
/// Defaults to `warn`, or `info` in verbose mode. `RUST_LOG` still takes
/// precedence when set. Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
}

pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Echo to stderr in verbose mode and always forward to the logger.
    pub fn log(&self, msg: &str) {
        log::debug!("{}", msg);
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
    }

    #[test]
    fn test_verbose_logger_state() {
        assert!(VerboseLogger::new(true).is_enabled());
        assert!(!VerboseLogger::new(false).is_enabled());
    }
}
