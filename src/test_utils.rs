use crate::config::Config;
use crate::domain::{Role, RoleRegistry, YoctoNear};
use crate::errors::StakingBackendError;
use crate::interface::{AccessGate, DelegationDao, FundsTransfer, StakingBackend};
use crate::{DelegationPool, PoolSettings};
use near_sdk::test_utils::VMContextBuilder;
use near_sdk::{testing_env, AccountId};

pub const POOL_ID: &str = "dao.oysterpack.near";
pub const TARGET: &str = "collator.near";
pub const ADMIN: &str = "admin.near";
pub const MIN_DELEGATION_STAKE: u128 = 100;

pub type TestPool = DelegationPool<RoleRegistry, FakeStakingBackend, FakeFunds>;

pub fn to_account_id(id: &str) -> AccountId {
    id.parse().unwrap()
}

/// resets the mocked NEAR runtime - which clears the logs
pub fn reset_env() {
    let context = VMContextBuilder::new()
        .current_account_id(to_account_id(POOL_ID))
        .build();
    testing_env!(context);
}

/// new pool configured with [MIN_DELEGATION_STAKE]
pub fn new_pool() -> TestPool {
    reset_env();
    DelegationPool::new(
        PoolSettings {
            pool_id: to_account_id(POOL_ID),
            target: to_account_id(TARGET),
            admin: to_account_id(ADMIN),
            config: Some(Config::new(MIN_DELEGATION_STAKE.into()).unwrap()),
        },
        RoleRegistry::default(),
        FakeStakingBackend::default(),
        FakeFunds::default(),
    )
}

/// creates a new pool with the specified members registered
pub fn new_pool_with_members(members: &[&str]) -> TestPool {
    let mut pool = new_pool();
    for member in members {
        pool.access_gate
            .grant_role(Role::Member, &to_account_id(member));
    }
    pool
}

/// simulates a member deposit, i.e., the funds are received by the pool's account before the
/// deposit is applied
pub fn deposit(pool: &mut TestPool, member: &str, amount: u128) {
    pool.funds.balance.0 += amount;
    pool.deposit(&to_account_id(member), amount.into()).unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Delegate {
        candidate: AccountId,
        amount: YoctoNear,
        candidate_delegation_count: u32,
        delegator_delegation_count: u32,
    },
    IncreaseBond {
        candidate: AccountId,
        amount: YoctoNear,
    },
    ScheduleRevoke {
        candidate: AccountId,
    },
    ExecuteDelegationRequest {
        delegator: AccountId,
        candidate: AccountId,
    },
}

/// Records the calls it receives. Delegations do not move funds.
#[derive(Debug, Default)]
pub struct FakeStakingBackend {
    pub delegator: bool,
    /// when true, executing a scheduled revoke clears the delegation
    pub exit_delay_elapsed: bool,
    pub candidate_delegation_count: u32,
    pub fail: bool,
    pub calls: Vec<BackendCall>,
}

impl FakeStakingBackend {
    fn check_failure(&self, call: &'static str) -> Result<(), StakingBackendError> {
        if self.fail {
            Err(StakingBackendError::new(call, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

impl StakingBackend for FakeStakingBackend {
    fn is_delegator(&self, _delegator: &AccountId) -> bool {
        self.delegator
    }

    fn candidate_delegation_count(&self, _candidate: &AccountId) -> u32 {
        self.candidate_delegation_count
    }

    fn delegator_delegation_count(&self, _delegator: &AccountId) -> u32 {
        if self.delegator {
            1
        } else {
            0
        }
    }

    fn delegate(
        &mut self,
        candidate: &AccountId,
        amount: YoctoNear,
        candidate_delegation_count: u32,
        delegator_delegation_count: u32,
    ) -> Result<(), StakingBackendError> {
        self.check_failure("delegate")?;
        self.calls.push(BackendCall::Delegate {
            candidate: candidate.clone(),
            amount,
            candidate_delegation_count,
            delegator_delegation_count,
        });
        self.delegator = true;
        Ok(())
    }

    fn increase_bond(
        &mut self,
        candidate: &AccountId,
        amount: YoctoNear,
    ) -> Result<(), StakingBackendError> {
        self.check_failure("increase_bond")?;
        self.calls.push(BackendCall::IncreaseBond {
            candidate: candidate.clone(),
            amount,
        });
        Ok(())
    }

    fn schedule_revoke_delegation(
        &mut self,
        candidate: &AccountId,
    ) -> Result<(), StakingBackendError> {
        self.check_failure("schedule_revoke_delegation")?;
        self.calls.push(BackendCall::ScheduleRevoke {
            candidate: candidate.clone(),
        });
        Ok(())
    }

    fn execute_delegation_request(
        &mut self,
        delegator: &AccountId,
        candidate: &AccountId,
    ) -> Result<(), StakingBackendError> {
        self.check_failure("execute_delegation_request")?;
        self.calls.push(BackendCall::ExecuteDelegationRequest {
            delegator: delegator.clone(),
            candidate: candidate.clone(),
        });
        if self.exit_delay_elapsed {
            self.delegator = false;
        }
        Ok(())
    }
}

/// Holds a balance and records the transfers it makes.
#[derive(Debug, Default)]
pub struct FakeFunds {
    pub balance: YoctoNear,
    pub fail: bool,
    pub transfers: Vec<(AccountId, YoctoNear)>,
}

impl FundsTransfer for FakeFunds {
    fn held_balance(&self) -> YoctoNear {
        self.balance
    }

    fn send(&mut self, recipient: &AccountId, amount: YoctoNear) -> bool {
        if self.fail || amount > self.balance {
            return false;
        }
        self.balance.0 -= amount.0;
        self.transfers.push((recipient.clone(), amount));
        true
    }
}
