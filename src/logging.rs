//! Logger setup for the `cyphers` binary.
//!
//! Uses the `log` facade with `env_logger` as the backend. Records always go
//! to stderr because stdout carries the cipher output.
//!
//! - no flag: warnings and errors only
//! - `-v`: info (byte and line counts)
//! - `-vv`: debug (validated keys)
//! - `-vvv`: trace
//!
//! `RUST_LOG` takes precedence over the flag.

use log::LevelFilter;

/// Map a `-v` count to a level filter
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
    }
}
