use crate::domain::Role;
use crate::errors::PoolResult;
use crate::interface::{AccessGate, FundsTransfer, RoleManagement, StakingBackend};
use crate::DelegationPool;
use near_sdk::AccountId;

impl<G, S, F> RoleManagement for DelegationPool<G, S, F>
where
    G: AccessGate,
    S: StakingBackend,
    F: FundsTransfer,
{
    fn grant_admin(&mut self, caller: &AccountId, account_id: &AccountId) -> PoolResult<()> {
        self.check_role(caller, Role::Admin)?;
        self.check_role(caller, Role::Member)?;
        self.access_gate.grant_role(Role::Admin, account_id);
        Ok(())
    }

    fn grant_member(&mut self, caller: &AccountId, account_id: &AccountId) -> PoolResult<()> {
        self.check_role(caller, Role::Admin)?;
        self.access_gate.grant_role(Role::Member, account_id);
        Ok(())
    }

    fn remove_member(&mut self, caller: &AccountId, account_id: &AccountId) -> PoolResult<()> {
        self.check_role(caller, Role::Admin)?;
        self.access_gate.revoke_role(Role::Member, account_id);
        Ok(())
    }
}
