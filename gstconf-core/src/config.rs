//! Parser configuration.

/// Environment variable whose presence turns on transition tracing.
pub const DEBUG_ENV: &str = "DEBUG";

/// How malformed scalar values are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Malformed numbers read as zero, any flag other than `true` is false.
    #[default]
    Lenient,
    /// Malformed numbers and flags, and unnamed actions, are grammar errors.
    Strict,
}

/// Options shared by the machine and the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub strictness: Strictness,
    /// Emit every (state, event) pair at `debug` level on `gstconf::trace`.
    pub trace: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with tracing enabled when `DEBUG` is set.
    pub fn from_env() -> Self {
        Self {
            trace: std::env::var_os(DEBUG_ENV).is_some(),
            ..Self::default()
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strictness = if strict { Strictness::Strict } else { Strictness::Lenient };
        self
    }

    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lenient_and_quiet() {
        let config = ParserConfig::default();
        assert_eq!(config.strictness, Strictness::Lenient);
        assert!(!config.trace);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().strict(true).trace(true);
        assert!(config.is_strict());
        assert!(config.trace);
        assert!(!config.strict(false).is_strict());
    }

    #[test]
    fn test_from_env_never_turns_on_strict() {
        let config = ParserConfig::from_env();
        assert_eq!(config.strictness, Strictness::Lenient);
        assert_eq!(config.trace, std::env::var_os(DEBUG_ENV).is_some());
    }
}
