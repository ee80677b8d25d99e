//! Construction options for [`MinStack`](crate::MinStack).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options used when building a stack with
/// [`MinStack::with_config`](crate::MinStack::with_config).
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Number of frames to pre-allocate
    pub initial_capacity: usize,

    /// Upper bound enforced by [`MinStack::try_push`](crate::MinStack::try_push)
    pub max_depth: Option<usize>,
}

impl StackConfig {
    /// Parses and validates a config from a TOML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_stack::StackConfig;
    ///
    /// let config = StackConfig::from_toml_str("initial_capacity = 16").unwrap();
    /// assert_eq!(config.initial_capacity, 16);
    /// assert_eq!(config.max_depth, None);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the options are consistent with each other.
    pub fn validate(&self) -> Result<()> {
        match self.max_depth {
            Some(0) => Err(Error::config("max_depth must be at least 1")),
            Some(max) if self.initial_capacity > max => Err(Error::config(format!(
                "initial_capacity ({}) exceeds max_depth ({max})",
                self.initial_capacity
            ))),
            _ => Ok(()),
        }
    }
}
