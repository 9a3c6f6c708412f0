pub mod delegation_dao;
pub mod operator;
pub mod role_management;

use crate::domain::{PoolState, Role};
use crate::errors::{PoolError, PoolResult};
use crate::interface::{AccessGate, FundsTransfer, StakingBackend};
use crate::DelegationPool;
use near_sdk::AccountId;

impl<G, S, F> DelegationPool<G, S, F>
where
    G: AccessGate,
    S: StakingBackend,
    F: FundsTransfer,
{
    /// ## Errors
    /// [PoolError::PermissionError] if the caller does not have the role
    pub(crate) fn check_role(&self, caller: &AccountId, role: Role) -> PoolResult<()> {
        if self.access_gate.has_role(role, caller) {
            Ok(())
        } else {
            Err(PoolError::PermissionError {
                account: caller.clone(),
                role,
            })
        }
    }

    pub(crate) fn state_error(&self, operation: &'static str) -> PoolError {
        PoolError::StateError {
            operation,
            state: self.record.state,
        }
    }

    /// Verifies the pool's delegator status with the staking backend.
    ///
    /// ## Errors
    /// [PoolError::InconsistentBackendState] if the backend disagrees with `expected`
    pub(crate) fn check_delegator_status(&self, expected: bool) -> PoolResult<()> {
        let is_delegator = self.staking_backend.is_delegator(&self.record.pool_id);
        if is_delegator == expected {
            Ok(())
        } else {
            Err(PoolError::InconsistentBackendState {
                state: self.record.state,
                is_delegator,
            })
        }
    }

    pub(crate) fn set_state(&mut self, state: PoolState) {
        self.record.state = state;
    }
}
