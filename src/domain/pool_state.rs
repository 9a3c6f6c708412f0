use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};
use std::fmt::{self, Display, Formatter};

/// Lifecycle state of the pooled delegation.
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq,
)]
#[borsh(crate = "near_sdk::borsh")]
#[serde(crate = "near_sdk::serde")]
pub enum PoolState {
    /// members deposit funds until the minimum delegation stake is reached
    Collecting,
    /// the pool's balance is delegated to the target
    Staking,
    /// a revocation has been scheduled with the staking backend and is waiting for the exit delay
    Revoking,
    /// the delegation was revoked and the funds are back in the pool
    Revoked,
}

impl PoolState {
    /// funds are not delegated away, i.e., members may withdraw and the target may be changed
    pub fn is_settled(&self) -> bool {
        matches!(self, PoolState::Collecting | PoolState::Revoked)
    }

    pub fn accepts_deposits(&self) -> bool {
        matches!(self, PoolState::Collecting | PoolState::Staking)
    }
}

impl Display for PoolState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            PoolState::Collecting => "Collecting",
            PoolState::Staking => "Staking",
            PoolState::Revoking => "Revoking",
            PoolState::Revoked => "Revoked",
        };
        f.write_str(name)
    }
}
