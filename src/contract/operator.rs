use crate::domain::Role;
use crate::errors::PoolResult;
use crate::interface::{self, AccessGate, FundsTransfer, Operator, PoolSnapshot, StakingBackend};
use crate::DelegationPool;
use near_sdk::AccountId;
use std::convert::TryFrom;

impl<G, S, F> Operator for DelegationPool<G, S, F>
where
    G: AccessGate,
    S: StakingBackend,
    F: FundsTransfer,
{
    fn pool_snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            pool_id: self.record.pool_id.clone(),
            target: self.record.target.clone(),
            state: self.record.state,
            total_stake: self.record.ledger.total().into(),
            held_balance: self.funds.held_balance().into(),
            member_count: u32::try_from(self.record.ledger.member_count()).unwrap_or(u32::MAX),
            min_delegation_stake: self.record.config.min_delegation_stake().into(),
        }
    }

    fn config(&self) -> interface::Config {
        self.record.config.into()
    }

    fn update_config(
        &mut self,
        caller: &AccountId,
        config: interface::Config,
    ) -> PoolResult<interface::Config> {
        self.check_role(caller, Role::Admin)?;
        self.record.config.apply_updates(&config)?;
        Ok(self.record.config.into())
    }
}
