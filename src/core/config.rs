/*!
Verification run configuration.

Controls how much a verification pass prints, which framings it checks, and
whether it may fan descriptors out across threads.
*/

use std::env;

use crate::core::descriptor::Endianness;
use crate::core::error::{Error, Result};

/// Environment variable enabling verbose output
pub const ENV_VERBOSE: &str = "HASHREG_VERBOSE";

/// Environment variable enabling parallel verification
pub const ENV_PARALLEL: &str = "HASHREG_PARALLEL";

/// Environment variable switching the listing to bare names
pub const ENV_NAMES_ONLY: &str = "HASHREG_NAMES_ONLY";

/// Configuration for a verification pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Print every framing's computed value, not just the summary line
    pub verbose: bool,
    /// Framings to check, in order
    pub endians: Vec<Endianness>,
    /// Verify descriptors concurrently (needs the `rayon` feature)
    pub parallel: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            endians: vec![Endianness::Little, Endianness::Big],
            parallel: false,
        }
    }
}

impl VerifyConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Only check the host's own framing
    pub fn native_only() -> Self {
        Self {
            endians: vec![Endianness::Native],
            ..Self::default()
        }
    }

    /// Read `HASHREG_VERBOSE` and `HASHREG_PARALLEL` on top of the defaults
    pub fn from_env() -> Self {
        Self {
            verbose: env_flag(ENV_VERBOSE),
            parallel: env_flag(ENV_PARALLEL),
            ..Self::default()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_endians(mut self, endians: Vec<Endianness>) -> Self {
        self.endians = endians;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endians.is_empty() {
            return Err(Error::InvalidConfig("verification needs at least one framing".into()));
        }
        Ok(())
    }
}

/// True when `name` is set to anything but empty or `0`
pub fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| !v.is_empty() && v != "0").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_check_both_framings() {
        let config = VerifyConfig::new();
        assert!(!config.verbose);
        assert!(!config.parallel);
        assert_eq!(config.endians, vec![Endianness::Little, Endianness::Big]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = VerifyConfig::native_only().with_verbose(true).with_parallel(true);
        assert!(config.verbose);
        assert!(config.parallel);
        assert_eq!(config.endians, vec![Endianness::Native]);
    }

    #[test]
    fn test_empty_framings_rejected() {
        let config = VerifyConfig::new().with_endians(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_flag_unset_is_false() {
        assert!(!env_flag("HASHREG_TEST_FLAG_THAT_IS_NEVER_SET"));
    }
}
