use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{InvalidArgumentSnafu, Result};

const DEFAULT_MAX_SIZE: usize = 128;

fn default_max_size() -> usize {
    DEFAULT_MAX_SIZE
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of resident entries.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl CacheConfig {
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_size > 0,
            InvalidArgumentSnafu {
                reason: "max_size must be a positive integer"
            }
        );
        Ok(())
    }
}
