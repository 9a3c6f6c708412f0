use crate::domain::YoctoNear;
use crate::errors::{PoolError, PoolResult};
use crate::math::U256;
use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    AccountId,
};
use std::collections::BTreeMap;

/// Tracks each member's principal together with the pool's total principal.
///
/// `total == sum(stakes)` - the fields are private and every mutator updates both, computing the new
/// values before committing either of them.
///
/// Zero stakes are never stored, i.e., a member with no stake has no entry.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
pub struct StakeLedger {
    stakes: BTreeMap<AccountId, YoctoNear>,
    total: YoctoNear,
}

impl StakeLedger {
    pub fn total(&self) -> YoctoNear {
        self.total
    }

    pub fn stake_of(&self, account_id: &AccountId) -> YoctoNear {
        self.stakes.get(account_id).copied().unwrap_or_default()
    }

    pub fn member_count(&self) -> usize {
        self.stakes.len()
    }

    /// ## Errors
    /// [PoolError::ArithmeticOverflow] if either the member stake or the total would overflow
    pub fn credit(&mut self, account_id: &AccountId, amount: YoctoNear) -> PoolResult<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let stake = self
            .stake_of(account_id)
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let total = self
            .total
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.stakes.insert(account_id.clone(), stake);
        self.total = total;
        Ok(())
    }

    /// ## Errors
    /// [PoolError::ArithmeticOverflow] if the member's stake is less than the amount
    pub fn debit(&mut self, account_id: &AccountId, amount: YoctoNear) -> PoolResult<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let stake = self
            .stake_of(account_id)
            .checked_sub(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let total = self
            .total
            .checked_sub(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        if stake.is_zero() {
            self.stakes.remove(account_id);
        } else {
            self.stakes.insert(account_id.clone(), stake);
        }
        self.total = total;
        Ok(())
    }

    /// Removes the member's entire stake and returns it.
    pub fn debit_all(&mut self, account_id: &AccountId) -> PoolResult<YoctoNear> {
        let stake = self.stake_of(account_id);
        if stake.is_zero() {
            return Ok(stake);
        }
        let total = self
            .total
            .checked_sub(stake)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.stakes.remove(account_id);
        self.total = total;
        Ok(stake)
    }

    /// Member's claim on `held_balance`, i.e., `held_balance * stake / total` rounded down.
    ///
    /// The remainder stays with the pool and benefits the remaining members.
    pub fn claim(&self, account_id: &AccountId, held_balance: YoctoNear) -> PoolResult<YoctoNear> {
        if self.total.is_zero() {
            return Err(PoolError::ZeroTotalStake);
        }
        let value = U256::from(held_balance.value()) * U256::from(self.stake_of(account_id).value())
            / U256::from(self.total.value());
        if value > U256::from(u128::MAX) {
            return Err(PoolError::ArithmeticOverflow);
        }
        Ok(value.as_u128().into())
    }

    /// returns true if the tracked total matches the sum of the member stakes
    pub fn is_consistent(&self) -> bool {
        self.stakes
            .values()
            .try_fold(0u128, |sum, stake| sum.checked_add(stake.value()))
            .map_or(false, |sum| sum == self.total.value())
    }
}
