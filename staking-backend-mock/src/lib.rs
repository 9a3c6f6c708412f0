//! In-memory staking network used to drive the delegation pool in integration tests.
//!
//! [MockChain] plays both the staking backend and the pool's account. Handles are cheap to clone
//! and share the same state, so a test can keep one handle to inspect and manipulate the chain
//! while the pool owns the others.

use near_sdk::AccountId;
use oysterpack_near_delegation_dao::domain::YoctoNear;
use oysterpack_near_delegation_dao::errors::StakingBackendError;
use oysterpack_near_delegation_dao::interface::{FundsTransfer, StakingBackend};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Clone)]
pub struct MockChain(Rc<RefCell<ChainState>>);

struct ChainState {
    pool_id: AccountId,
    /// the pool account's liquid balance
    balance: u128,
    /// the pool's delegation - the mock supports a single delegation per delegator
    delegation: Option<Delegation>,
    /// delegations held by the candidates from other delegators
    other_delegations: BTreeMap<AccountId, u32>,
    round: u64,
    /// number of rounds a scheduled revoke needs to wait before it can be executed
    exit_delay: u64,
    fail_transfers: bool,
    transfers: Vec<(AccountId, u128)>,
}

#[derive(Debug, Clone)]
struct Delegation {
    candidate: AccountId,
    amount: u128,
    executable_round: Option<u64>,
}

impl MockChain {
    pub fn new(pool_id: AccountId, exit_delay: u64) -> Self {
        Self(Rc::new(RefCell::new(ChainState {
            pool_id,
            balance: 0,
            delegation: None,
            other_delegations: BTreeMap::new(),
            round: 0,
            exit_delay,
            fail_transfers: false,
            transfers: vec![],
        })))
    }

    /// funds received by the pool's account, e.g., a member deposit or rewards paid out
    pub fn receive(&self, amount: u128) {
        self.0.borrow_mut().balance += amount;
    }

    /// rewards that are compounded into the delegation
    pub fn accrue_delegation_rewards(&self, amount: u128) {
        if let Some(delegation) = self.0.borrow_mut().delegation.as_mut() {
            delegation.amount += amount;
        }
    }

    pub fn advance_rounds(&self, rounds: u64) {
        self.0.borrow_mut().round += rounds;
    }

    /// simulates the staking network kicking out the delegation, e.g., because the candidate left
    /// - the delegated funds are returned to the pool's account
    pub fn force_undelegate(&self) {
        let mut state = self.0.borrow_mut();
        if let Some(delegation) = state.delegation.take() {
            state.balance += delegation.amount;
        }
    }

    pub fn set_other_delegations(&self, candidate: AccountId, count: u32) {
        self.0.borrow_mut().other_delegations.insert(candidate, count);
    }

    pub fn set_transfer_failure(&self, fail: bool) {
        self.0.borrow_mut().fail_transfers = fail;
    }

    pub fn balance(&self) -> u128 {
        self.0.borrow().balance
    }

    pub fn delegated_amount(&self) -> u128 {
        self.0
            .borrow()
            .delegation
            .as_ref()
            .map_or(0, |delegation| delegation.amount)
    }

    pub fn delegation_candidate(&self) -> Option<AccountId> {
        self.0
            .borrow()
            .delegation
            .as_ref()
            .map(|delegation| delegation.candidate.clone())
    }

    pub fn transfers(&self) -> Vec<(AccountId, u128)> {
        self.0.borrow().transfers.clone()
    }

    /// total amount transferred to the account
    pub fn received_by(&self, account_id: &AccountId) -> u128 {
        self.0
            .borrow()
            .transfers
            .iter()
            .filter(|(recipient, _)| recipient == account_id)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl ChainState {
    fn delegation_to(
        &mut self,
        candidate: &AccountId,
        call: &'static str,
    ) -> Result<&mut Delegation, StakingBackendError> {
        match self.delegation.as_mut() {
            Some(delegation) if &delegation.candidate == candidate => Ok(delegation),
            _ => Err(StakingBackendError::new(
                call,
                format!("no delegation to {}", candidate),
            )),
        }
    }

    fn debit_balance(&mut self, amount: u128, call: &'static str) -> Result<(), StakingBackendError> {
        if amount > self.balance {
            return Err(StakingBackendError::new(
                call,
                format!("insufficient balance: {} < {}", self.balance, amount),
            ));
        }
        self.balance -= amount;
        Ok(())
    }
}

impl StakingBackend for MockChain {
    fn is_delegator(&self, delegator: &AccountId) -> bool {
        let state = self.0.borrow();
        delegator == &state.pool_id && state.delegation.is_some()
    }

    fn candidate_delegation_count(&self, candidate: &AccountId) -> u32 {
        let state = self.0.borrow();
        let others = state.other_delegations.get(candidate).copied().unwrap_or(0);
        match state.delegation.as_ref() {
            Some(delegation) if &delegation.candidate == candidate => others + 1,
            _ => others,
        }
    }

    fn delegator_delegation_count(&self, delegator: &AccountId) -> u32 {
        if self.is_delegator(delegator) {
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
        const CALL: &str = "delegate";
        if self.0.borrow().delegation.is_some() {
            return Err(StakingBackendError::new(CALL, "already delegating"));
        }
        let pool_id = self.0.borrow().pool_id.clone();
        if candidate_delegation_count < self.candidate_delegation_count(candidate) {
            return Err(StakingBackendError::new(
                CALL,
                format!(
                    "candidate delegation count hint is too low: {}",
                    candidate_delegation_count
                ),
            ));
        }
        if delegator_delegation_count < self.delegator_delegation_count(&pool_id) {
            return Err(StakingBackendError::new(
                CALL,
                format!(
                    "delegator delegation count hint is too low: {}",
                    delegator_delegation_count
                ),
            ));
        }
        let mut state = self.0.borrow_mut();
        state.debit_balance(amount.value(), CALL)?;
        state.delegation = Some(Delegation {
            candidate: candidate.clone(),
            amount: amount.value(),
            executable_round: None,
        });
        Ok(())
    }

    fn increase_bond(
        &mut self,
        candidate: &AccountId,
        amount: YoctoNear,
    ) -> Result<(), StakingBackendError> {
        const CALL: &str = "increase_bond";
        let mut state = self.0.borrow_mut();
        state.delegation_to(candidate, CALL)?;
        state.debit_balance(amount.value(), CALL)?;
        state.delegation_to(candidate, CALL)?.amount += amount.value();
        Ok(())
    }

    fn schedule_revoke_delegation(
        &mut self,
        candidate: &AccountId,
    ) -> Result<(), StakingBackendError> {
        const CALL: &str = "schedule_revoke_delegation";
        let mut state = self.0.borrow_mut();
        let executable_round = state.round + state.exit_delay;
        let delegation = state.delegation_to(candidate, CALL)?;
        if delegation.executable_round.is_some() {
            return Err(StakingBackendError::new(CALL, "revoke is already scheduled"));
        }
        delegation.executable_round = Some(executable_round);
        Ok(())
    }

    fn execute_delegation_request(
        &mut self,
        delegator: &AccountId,
        candidate: &AccountId,
    ) -> Result<(), StakingBackendError> {
        let mut state = self.0.borrow_mut();
        if delegator != &state.pool_id {
            return Ok(());
        }
        let round = state.round;
        let executable = match state.delegation.as_ref() {
            Some(delegation) if &delegation.candidate == candidate => delegation
                .executable_round
                .map_or(false, |executable_round| round >= executable_round),
            _ => false,
        };
        if executable {
            if let Some(delegation) = state.delegation.take() {
                state.balance += delegation.amount;
            }
        }
        Ok(())
    }
}

impl FundsTransfer for MockChain {
    fn held_balance(&self) -> YoctoNear {
        self.0.borrow().balance.into()
    }

    fn send(&mut self, recipient: &AccountId, amount: YoctoNear) -> bool {
        let mut state = self.0.borrow_mut();
        if state.fail_transfers || amount.value() > state.balance {
            return false;
        }
        state.balance -= amount.value();
        state.transfers.push((recipient.clone(), amount.value()));
        true
    }
}
