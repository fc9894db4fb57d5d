//! Console Logger
//!
//! Installs `console_log` as the `log` backend with a configurable level.

use log::{Level, LevelFilter, SetLoggerError};

/// Parse a level name, falling back to `Info` for anything unrecognised
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Most verbose level that still gets a console backend; `None` means logging is off
pub fn backend_level(filter: LevelFilter) -> Option<Level> {
    filter.to_level()
}

/// Route `log` records to the browser console at `filter` and above.
///
/// `LevelFilter::Off` installs nothing. Fails if another logger is already set.
pub fn init_logger(filter: LevelFilter) -> Result<(), SetLoggerError> {
    match backend_level(filter) {
        Some(level) => console_log::init_with_level(level),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_backend_level() {
        assert_eq!(backend_level(LevelFilter::Debug), Some(Level::Debug));
        assert_eq!(backend_level(LevelFilter::Error), Some(Level::Error));
        assert_eq!(backend_level(LevelFilter::Off), None);
    }
}
