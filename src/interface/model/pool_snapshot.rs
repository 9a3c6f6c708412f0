use crate::domain::PoolState;
use near_sdk::{
    json_types::U128,
    serde::{Deserialize, Serialize},
    AccountId,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolSnapshot {
    pub pool_id: AccountId,
    pub target: AccountId,
    pub state: PoolState,

    /// sum of all member stakes
    pub total_stake: U128,
    /// the pool's current balance - may exceed the total stake by the rewards that accrued
    pub held_balance: U128,
    /// number of accounts with a non-zero stake
    pub member_count: u32,

    pub min_delegation_stake: U128,
}
