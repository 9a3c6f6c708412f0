use crate::domain::YoctoNear;
use crate::errors::PoolResult;
use near_sdk::{
    serde::{Deserialize, Serialize},
    AccountId,
};

pub trait DelegationDao {
    ////////////////////////////
    //     VIEW METHODS    ///
    // //////////////////////

    /// returns the pool's held balance
    ///
    /// ## Errors
    /// - if the caller is not a member
    fn check_free_balance(&self, caller: &AccountId) -> PoolResult<YoctoNear>;

    //////////////////////////////
    //     CHANGE METHODS    ///
    // ////////////////////////

    /// Credits the caller's stake with the deposited amount. The deposited funds are expected to
    /// already be part of the pool's held balance.
    ///
    /// - while collecting, once the total stake reaches the minimum delegation stake, the pool's
    ///   entire held balance is delegated to the target and the pool transitions to `Staking`
    /// - while staking, the amount is bonded to the existing delegation
    ///
    /// ## Errors
    /// - if the caller is not a member
    /// - if the amount is zero
    /// - if the pool is revoking or revoked
    /// - if the pool is staking but the staking backend does not report the pool as a delegator
    /// - if the staking backend call fails - in which case the credit is rolled back
    fn deposit(&mut self, caller: &AccountId, amount: YoctoNear) -> PoolResult<()>;

    /// Schedules the delegation to be revoked and transitions the pool to `Revoking`.
    ///
    /// ## Errors
    /// - if the caller is not an admin
    /// - if the pool is not staking
    fn schedule_revoke(&mut self, caller: &AccountId) -> PoolResult<()>;

    /// Tries to execute the scheduled revocation. Once the staking backend no longer reports the
    /// pool as a delegator, the pool transitions to `Revoked`.
    ///
    /// ## Errors
    /// - if the caller is not a member
    /// - if the pool is not revoking
    fn execute_revoke(&mut self, caller: &AccountId) -> PoolResult<RevokeStatus>;

    /// Transfers the caller's share of the held balance to the recipient and clears the caller's
    /// stake. Returns the amount transferred.
    ///
    /// share = held balance * member stake / total stake
    ///
    /// If the pool is revoking, the revocation is executed first.
    ///
    /// ## Errors
    /// - if the caller is not a member
    /// - if the pool is staking
    /// - [NotReady](crate::errors::PoolError::NotReady) if the revocation cannot be executed yet
    /// - if the staking backend still reports the pool as a delegator
    /// - if the total stake is zero
    /// - if the transfer fails - in which case the caller's stake is restored
    fn withdraw(&mut self, caller: &AccountId, recipient: &AccountId) -> PoolResult<YoctoNear>;

    /// ## Errors
    /// - if the caller is not an admin
    /// - if the pool is staking or revoking
    fn change_target(&mut self, caller: &AccountId, new_target: AccountId) -> PoolResult<()>;

    /// Puts the pool back into `Collecting` in order to start a new delegation cycle.
    ///
    /// ## Errors
    /// - if the caller is not an admin
    fn reset_dao(&mut self, caller: &AccountId) -> PoolResult<()>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub enum RevokeStatus {
    /// the delegation was revoked and the funds are back in the pool
    Revoked,
    /// the staking network's exit delay has not yet elapsed
    Pending,
}
