use crate::domain::YoctoNear;
use crate::errors::StakingBackendError;
use near_sdk::AccountId;

/// The external staking service that delegates the pool's funds to a validator / collator.
///
/// The backend's state can change outside of the pool's control, e.g., the delegation may be
/// forcibly removed - thus the pool re-verifies [is_delegator](StakingBackend::is_delegator)
/// instead of trusting its own recorded state.
pub trait StakingBackend {
    ////////////////////////////
    //     VIEW METHODS    ///
    // //////////////////////

    /// returns true if the account currently has an active delegation
    fn is_delegator(&self, delegator: &AccountId) -> bool;

    /// number of delegations the candidate currently holds
    fn candidate_delegation_count(&self, candidate: &AccountId) -> u32;

    /// number of delegations the delegator currently holds
    fn delegator_delegation_count(&self, delegator: &AccountId) -> u32;

    //////////////////////////////
    //     CHANGE METHODS    ///
    // ////////////////////////

    /// Delegates `amount` from the pool's balance to the candidate.
    ///
    /// The delegation counts are hints the staking network uses to bound the cost of the call.
    fn delegate(
        &mut self,
        candidate: &AccountId,
        amount: YoctoNear,
        candidate_delegation_count: u32,
        delegator_delegation_count: u32,
    ) -> Result<(), StakingBackendError>;

    /// bonds more of the pool's balance to an existing delegation
    fn increase_bond(
        &mut self,
        candidate: &AccountId,
        amount: YoctoNear,
    ) -> Result<(), StakingBackendError>;

    /// Requests the delegation to be revoked. The request can be executed once the staking
    /// network's exit delay has elapsed.
    fn schedule_revoke_delegation(&mut self, candidate: &AccountId)
        -> Result<(), StakingBackendError>;

    /// Executes a pending revoke request.
    ///
    /// If the exit delay has not yet elapsed, the request is left pending - callers check
    /// [is_delegator](StakingBackend::is_delegator) to find out whether the delegation was revoked.
    fn execute_delegation_request(
        &mut self,
        delegator: &AccountId,
        candidate: &AccountId,
    ) -> Result<(), StakingBackendError>;
}
