//! Environment-based configuration for the coroutine runtime.
//!
//! The `may` runtime allocates a fixed stack per coroutine, and its default
//! is too small for the dispatch path (tracing spans, JSON serialization,
//! the routing regex all live on that stack). `JAPI_STACK_SIZE` tunes the
//! size; accepted in decimal (`32768`) or hex (`0x8000`). The default is
//! 32 KB, enough for the full pipeline with headroom.
//!
//! [`HttpServer::start`](crate::server::HttpServer::start) applies this
//! configuration before binding, so every host — binary or test — serves
//! with a workable stack without any per-call-site setup.

use std::env;

const STACK_SIZE_VAR: &str = "JAPI_STACK_SIZE";
const DEFAULT_STACK_SIZE: usize = 0x8000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes (default: 32 KB / 0x8000).
    pub stack_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for unset or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let stack_size = env::var(STACK_SIZE_VAR)
            .ok()
            .map(|val| parse_stack_size(&val))
            .unwrap_or(DEFAULT_STACK_SIZE);
        Self { stack_size }
    }

    /// Apply this configuration to the global `may` runtime.
    pub fn apply(&self) {
        may::config().set_stack_size(self.stack_size);
    }
}

fn parse_stack_size(val: &str) -> usize {
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).unwrap_or(DEFAULT_STACK_SIZE)
    } else {
        val.parse().unwrap_or(DEFAULT_STACK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_stack_size("16384"), 16384);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_stack_size("0x8000"), 0x8000);
    }

    #[test]
    fn test_unparseable_falls_back_to_default() {
        assert_eq!(parse_stack_size("lots"), DEFAULT_STACK_SIZE);
        assert_eq!(parse_stack_size("0xZZ"), DEFAULT_STACK_SIZE);
    }

    #[test]
    fn test_default() {
        assert_eq!(RuntimeConfig::default().stack_size, 0x8000);
    }
}
