const DEBUG_ENV: &str = "SECRETS_CACHE_DEBUG";

/// Construction options for a [`SecretsCacheClient`](crate::SecretsCacheClient).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Emit a trace line at every resolution decision point.
    pub debug: bool,
}

impl CacheConfig {
    /// Reads `SECRETS_CACHE_DEBUG`; `1`, `true`, `TRUE` and `yes` enable debug lines.
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { debug }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_off_by_default() {
        assert!(!CacheConfig::default().debug);
        assert!(CacheConfig::default().debug(true).debug);
    }

    #[test]
    fn parses_debug_flag_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
