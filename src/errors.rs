//! centralizes all error types

use crate::domain::{PoolState, Role, YoctoNear};
use near_sdk::AccountId;

pub type PoolResult<T> = Result<T, PoolError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    // lifecycle errors
    #[error("{operation} is not allowed while the pool is {state}")]
    StateError {
        operation: &'static str,
        state: PoolState,
    },
    #[error("ILLEGAL STATE : pool is {state} but staking backend reports is_delegator={is_delegator}")]
    InconsistentBackendState { state: PoolState, is_delegator: bool },
    #[error("revocation is not yet executable - try again after the exit delay")]
    NotReady,

    // accounting errors
    #[error("deposit amount must not be zero")]
    ZeroDeposit,
    #[error("total stake is zero")]
    ZeroTotalStake,
    #[error("held balance is insufficient: required={required} available={available}")]
    InsufficientBalance {
        required: YoctoNear,
        available: YoctoNear,
    },
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    // external errors
    #[error("failed to transfer {amount} yoctoNEAR to {recipient}")]
    TransferFailure {
        recipient: AccountId,
        amount: YoctoNear,
    },
    #[error(transparent)]
    Backend(#[from] StakingBackendError),

    // access errors
    #[error("{account} is missing the {role} role")]
    PermissionError { account: AccountId, role: Role },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Failure reported by the staking backend for a mutating call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("staking backend call '{call}' failed: {reason}")]
pub struct StakingBackendError {
    pub call: &'static str,
    pub reason: String,
}

impl StakingBackendError {
    pub fn new(call: &'static str, reason: impl Into<String>) -> Self {
        Self {
            call,
            reason: reason.into(),
        }
    }
}
