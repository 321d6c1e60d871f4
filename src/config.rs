use crate::error::{Error, Result};
use crate::types::{ItemsetLength, SupportCount};

/// Settings for a single mining run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinerConfig {
    /// Absolute support threshold, in transactions.
    pub min_support: SupportCount,
    /// Stop after this level even if larger candidates remain.
    pub max_len: Option<ItemsetLength>,
    /// Count candidate support on the rayon pool.
    pub parallel: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            max_len: None,
            parallel: false,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: SupportCount) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support == 0 {
            return Err(Error::InvalidSupport(self.min_support));
        }
        if self.max_len == Some(0) {
            return Err(Error::InvalidMaxLen);
        }
        Ok(())
    }

    /// Whether the driver may go on to build itemsets of `size`.
    pub(crate) fn allows_level(&self, size: ItemsetLength) -> bool {
        self.max_len.map_or(true, |max_len| size <= max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(MinerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_support_is_rejected() {
        let err = MinerConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidSupport(0)));
    }

    #[test]
    fn zero_max_len_is_rejected() {
        let err = MinerConfig::new(2).with_max_len(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidMaxLen));
    }

    #[test]
    fn level_budget() {
        let config = MinerConfig::new(1).with_max_len(2);
        assert!(config.allows_level(2));
        assert!(!config.allows_level(3));
        assert!(MinerConfig::new(1).allows_level(100));
    }
}
