use crate::domain::{PoolState, Role, YoctoNear};
use crate::errors::{PoolError, PoolResult, StakingBackendError};
use crate::events::Event;
use crate::interface::{AccessGate, DelegationDao, FundsTransfer, RevokeStatus, StakingBackend};
use crate::DelegationPool;
use near_sdk::AccountId;

impl<G, S, F> DelegationDao for DelegationPool<G, S, F>
where
    G: AccessGate,
    S: StakingBackend,
    F: FundsTransfer,
{
    fn check_free_balance(&self, caller: &AccountId) -> PoolResult<YoctoNear> {
        self.check_role(caller, Role::Member)?;
        Ok(self.funds.held_balance())
    }

    fn deposit(&mut self, caller: &AccountId, amount: YoctoNear) -> PoolResult<()> {
        self.check_role(caller, Role::Member)?;
        if amount.is_zero() {
            return Err(PoolError::ZeroDeposit);
        }

        if !self.record.state.accepts_deposits() {
            return Err(self.state_error("deposit"));
        }

        if self.record.state == PoolState::Staking {
            self.deposit_while_staking(caller, amount)?;
        } else {
            self.deposit_while_collecting(caller, amount)?;
        }
        Event::deposit(caller, amount).emit();
        Ok(())
    }

    fn schedule_revoke(&mut self, caller: &AccountId) -> PoolResult<()> {
        self.check_role(caller, Role::Admin)?;
        if self.record.state != PoolState::Staking {
            return Err(self.state_error("schedule_revoke"));
        }

        self.staking_backend
            .schedule_revoke_delegation(&self.record.target)?;
        self.set_state(PoolState::Revoking);
        Event::RevokeScheduled {
            target: self.record.target.clone(),
        }
        .emit();
        Ok(())
    }

    fn execute_revoke(&mut self, caller: &AccountId) -> PoolResult<RevokeStatus> {
        self.check_role(caller, Role::Member)?;
        self.try_execute_revoke()
    }

    fn withdraw(&mut self, caller: &AccountId, recipient: &AccountId) -> PoolResult<YoctoNear> {
        self.check_role(caller, Role::Member)?;
        match self.record.state {
            PoolState::Staking => return Err(self.state_error("withdraw")),
            PoolState::Revoking => {
                if self.try_execute_revoke()? == RevokeStatus::Pending {
                    return Err(PoolError::NotReady);
                }
            }
            PoolState::Collecting | PoolState::Revoked => {}
        }
        self.check_delegator_status(false)?;

        let held_balance = self.funds.held_balance();
        let amount = self.record.ledger.claim(caller, held_balance)?;
        if amount > held_balance {
            return Err(PoolError::InsufficientBalance {
                required: amount,
                available: held_balance,
            });
        }

        // the stake is cleared before the funds leave the pool - if the transfer fails, then the
        // stake is restored
        let stake = self.record.ledger.debit_all(caller)?;
        if stake.is_zero() {
            return Ok(YoctoNear::ZERO);
        }
        if !self.funds.send(recipient, amount) {
            self.record.ledger.credit(caller, stake)?;
            return Err(PoolError::TransferFailure {
                recipient: recipient.clone(),
                amount,
            });
        }

        Event::withdrawal(caller, recipient, amount).emit();
        Ok(amount)
    }

    fn change_target(&mut self, caller: &AccountId, new_target: AccountId) -> PoolResult<()> {
        self.check_role(caller, Role::Admin)?;
        if !self.record.state.is_settled() {
            return Err(self.state_error("change_target"));
        }

        let old_target = std::mem::replace(&mut self.record.target, new_target);
        Event::TargetChanged {
            old_target,
            new_target: self.record.target.clone(),
        }
        .emit();
        Ok(())
    }

    fn reset_dao(&mut self, caller: &AccountId) -> PoolResult<()> {
        self.check_role(caller, Role::Admin)?;
        self.set_state(PoolState::Collecting);
        Event::Reset.emit();
        Ok(())
    }
}

impl<G, S, F> DelegationPool<G, S, F>
where
    G: AccessGate,
    S: StakingBackend,
    F: FundsTransfer,
{
    /// Credits the member's stake and then runs the backend call. If the backend call fails, then
    /// the credit is rolled back.
    fn credit_then<T, C>(&mut self, member: &AccountId, amount: YoctoNear, call: C) -> PoolResult<T>
    where
        C: FnOnce(&mut Self) -> Result<T, StakingBackendError>,
    {
        self.record.ledger.credit(member, amount)?;
        match call(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.record.ledger.debit(member, amount)?;
                Err(err.into())
            }
        }
    }

    fn deposit_while_collecting(&mut self, member: &AccountId, amount: YoctoNear) -> PoolResult<()> {
        let delegated = self.credit_then(member, amount, |pool| {
            if pool.record.ledger.total() < pool.record.config.min_delegation_stake() {
                return Ok(None);
            }
            // the entire balance is delegated, which includes any funds that were paid to the pool
            // on top of the member deposits
            let amount = pool.funds.held_balance();
            let candidate_delegation_count = pool
                .staking_backend
                .candidate_delegation_count(&pool.record.target);
            let delegator_delegation_count = pool
                .staking_backend
                .delegator_delegation_count(&pool.record.pool_id);
            pool.staking_backend.delegate(
                &pool.record.target,
                amount,
                candidate_delegation_count,
                delegator_delegation_count,
            )?;
            Ok(Some(amount))
        })?;

        if let Some(amount) = delegated {
            self.set_state(PoolState::Staking);
            Event::delegated(&self.record.target, amount).emit();
        }
        Ok(())
    }

    fn deposit_while_staking(&mut self, member: &AccountId, amount: YoctoNear) -> PoolResult<()> {
        self.check_delegator_status(true)?;
        self.credit_then(member, amount, |pool| {
            pool.staking_backend
                .increase_bond(&pool.record.target, amount)
        })
    }

    fn try_execute_revoke(&mut self) -> PoolResult<RevokeStatus> {
        if self.record.state != PoolState::Revoking {
            return Err(self.state_error("execute_revoke"));
        }

        self.staking_backend
            .execute_delegation_request(&self.record.pool_id, &self.record.target)?;
        if self.staking_backend.is_delegator(&self.record.pool_id) {
            return Ok(RevokeStatus::Pending);
        }

        self.set_state(PoolState::Revoked);
        Event::Revoked {
            target: self.record.target.clone(),
        }
        .emit();
        Ok(RevokeStatus::Revoked)
    }
}
