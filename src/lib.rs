//! Pools member deposits into a single delegation towards a validator / collator.
//!
//! Members deposit funds while the pool is collecting. Once the total stake reaches the minimum
//! delegation stake, the pool's balance is delegated to the target. After the delegation is
//! revoked, each member withdraws their proportional share of the pool's balance, i.e., principal
//! plus the rewards that were paid out to the pool.
//!
//! The external services are injected:
//! - [AccessGate] - role membership
//! - [StakingBackend] - delegation, bonding, and revocation
//! - [FundsTransfer] - the pool's balance and outbound transfers

pub mod config;
pub mod contract;
pub mod domain;
pub mod errors;
pub mod events;
pub mod interface;
pub mod math;
pub mod near;

#[cfg(test)]
pub(crate) mod test_utils;

use crate::config::Config;
use crate::domain::{PoolRecord, PoolState, Role, YoctoNear};
use crate::interface::{AccessGate, FundsTransfer, StakingBackend};
use near_sdk::AccountId;

pub use crate::domain::RoleRegistry;
pub use crate::errors::PoolError;
pub use crate::interface::{DelegationDao, Operator, RevokeStatus, RoleManagement};

pub struct DelegationPool<G, S, F> {
    record: PoolRecord,

    access_gate: G,
    staking_backend: S,
    funds: F,
}

/// Settings used to create a new pool
pub struct PoolSettings {
    /// the pool's own account ID
    pub pool_id: AccountId,
    /// validator / collator to delegate to
    pub target: AccountId,
    /// initial administrator - who is also granted member rights
    pub admin: AccountId,
    /// if not specified, then the default config is used
    pub config: Option<Config>,
}

impl<G, S, F> DelegationPool<G, S, F>
where
    G: AccessGate,
    S: StakingBackend,
    F: FundsTransfer,
{
    /// Creates a new pool in the `Collecting` state. The admin is granted both the admin and
    /// member roles.
    pub fn new(settings: PoolSettings, mut access_gate: G, staking_backend: S, funds: F) -> Self {
        let PoolSettings {
            pool_id,
            target,
            admin,
            config,
        } = settings;
        access_gate.grant_role(Role::Admin, &admin);
        access_gate.grant_role(Role::Member, &admin);
        Self {
            record: PoolRecord::new(pool_id, target, config.unwrap_or_default()),
            access_gate,
            staking_backend,
            funds,
        }
    }

    /// Resumes a pool from its persisted record.
    pub fn from_record(record: PoolRecord, access_gate: G, staking_backend: S, funds: F) -> Self {
        Self {
            record,
            access_gate,
            staking_backend,
            funds,
        }
    }

    pub fn record(&self) -> &PoolRecord {
        &self.record
    }

    pub fn into_record(self) -> PoolRecord {
        self.record
    }

    pub fn state(&self) -> PoolState {
        self.record.state
    }

    pub fn target(&self) -> &AccountId {
        &self.record.target
    }

    pub fn pool_id(&self) -> &AccountId {
        &self.record.pool_id
    }

    pub fn total_stake(&self) -> YoctoNear {
        self.record.ledger.total()
    }

    pub fn member_stake(&self, account_id: &AccountId) -> YoctoNear {
        self.record.ledger.stake_of(account_id)
    }

    pub fn held_balance(&self) -> YoctoNear {
        self.funds.held_balance()
    }

    pub fn access_gate(&self) -> &G {
        &self.access_gate
    }

    pub fn staking_backend(&self) -> &S {
        &self.staking_backend
    }

    pub fn funds(&self) -> &F {
        &self.funds
    }
}
