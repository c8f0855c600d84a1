//! Registry configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a [`Registry`](crate::Registry).
///
/// Validated when the registry is constructed; immutable afterwards.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Number of slots reserved up front.
    ///
    /// Default: 16. The slot table doubles on demand past this point.
    /// Must not exceed `max_live`.
    pub initial_slots: usize,

    /// Maximum number of simultaneously live arrays.
    ///
    /// Default: `u32::MAX`, the full handle index space. Must be at
    /// least 1 and at most `u32::MAX`.
    pub max_live: usize,
}

impl RegistryConfig {
    /// Default number of pre-reserved slots.
    pub const DEFAULT_INITIAL_SLOTS: usize = 16;

    /// Default live-array limit.
    pub const DEFAULT_MAX_LIVE: usize = u32::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_slots: Self::DEFAULT_INITIAL_SLOTS,
            max_live: Self::DEFAULT_MAX_LIVE,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_live == 0 {
            return Err(ConfigError::ZeroMaxLive);
        }
        if self.max_live > Self::DEFAULT_MAX_LIVE {
            return Err(ConfigError::MaxLiveTooLarge {
                value: self.max_live,
            });
        }
        if self.initial_slots > self.max_live {
            return Err(ConfigError::InitialSlotsTooLarge {
                value: self.initial_slots,
                max_live: self.max_live,
            });
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors detected by [`RegistryConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_live` is zero; no array could ever be created.
    ZeroMaxLive,
    /// `max_live` exceeds the handle index space.
    MaxLiveTooLarge {
        /// The configured value.
        value: usize,
    },
    /// `initial_slots` reserves more slots than can ever be live.
    InitialSlotsTooLarge {
        /// The configured value.
        value: usize,
        /// The configured live-array limit.
        max_live: usize,
    },
    /// The slot table could not reserve `initial_slots` entries.
    ReservationFailed {
        /// The requested slot count.
        initial_slots: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxLive => write!(f, "max_live must be at least 1"),
            Self::MaxLiveTooLarge { value } => {
                write!(f, "max_live {value} exceeds u32::MAX")
            }
            Self::InitialSlotsTooLarge { value, max_live } => {
                write!(f, "initial_slots {value} exceeds max_live {max_live}")
            }
            Self::ReservationFailed { initial_slots } => {
                write!(f, "failed to reserve {initial_slots} registry slots")
            }
        }
    }
}

impl Error for ConfigError {}
