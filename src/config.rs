use crate::domain::YoctoNear;
use crate::errors::{PoolError, PoolResult};
use crate::interface;
use crate::near::YOCTO;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};

#[derive(Debug, BorshSerialize, BorshDeserialize, Clone, Copy, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
pub struct Config {
    /// the staking network will not accept a delegation below this amount - the pool collects
    /// deposits until its total stake reaches it
    min_delegation_stake: YoctoNear,
}

impl Config {
    pub fn new(min_delegation_stake: YoctoNear) -> PoolResult<Self> {
        let mut config = Self::default();
        config.apply_updates(&interface::Config {
            min_delegation_stake: Some(min_delegation_stake.into()),
        })?;
        Ok(config)
    }

    pub fn min_delegation_stake(&self) -> YoctoNear {
        self.min_delegation_stake
    }

    /// ## Errors
    /// [PoolError::InvalidConfig] if the updates are invalid - in which case nothing is applied
    pub fn apply_updates(&mut self, updates: &interface::Config) -> PoolResult<()> {
        if let Some(min_delegation_stake) = updates.min_delegation_stake {
            if min_delegation_stake.0 == 0 {
                return Err(PoolError::InvalidConfig(
                    "min_delegation_stake must not be zero".to_string(),
                ));
            }
            self.min_delegation_stake = min_delegation_stake.into();
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_delegation_stake: (5 * YOCTO).into(),
        }
    }
}

impl From<Config> for interface::Config {
    fn from(config: Config) -> Self {
        Self {
            min_delegation_stake: Some(config.min_delegation_stake.into()),
        }
    }
}
