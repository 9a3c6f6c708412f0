use crate::config::Config;
use crate::domain::{PoolState, StakeLedger};
use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    AccountId,
};

/// The pool's persisted state.
///
/// The pool's held balance is intentionally not part of the record - it is always queried from the
/// environment because rewards accrue to the pool's account outside of the pool's control.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
pub struct PoolRecord {
    /// the pool's own account ID - used to query the staking backend for the pool's delegator status
    pub pool_id: AccountId,
    /// validator / collator that the pool delegates to
    pub target: AccountId,
    pub state: PoolState,
    pub ledger: StakeLedger,
    pub config: Config,
}

impl PoolRecord {
    pub fn new(pool_id: AccountId, target: AccountId, config: Config) -> Self {
        Self {
            pool_id,
            target,
            state: PoolState::Collecting,
            ledger: StakeLedger::default(),
            config,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn borsh_round_trip() {
        let mut record = PoolRecord::new(
            to_account_id("dao.near"),
            to_account_id("collator.near"),
            Config::default(),
        );
        record
            .ledger
            .credit(&to_account_id("bob.near"), 100.into())
            .unwrap();
        record.state = PoolState::Revoking;

        let bytes = near_sdk::borsh::to_vec(&record).unwrap();
        let record2 = PoolRecord::try_from_slice(&bytes).unwrap();
        assert_eq!(record, record2);
    }
}
