use crate::domain::Role;
use near_sdk::AccountId;

/// Role based access control consumed by the pool.
///
/// The pool checks the caller's roles before it grants or revokes anything, so implementations are
/// not expected to authorize the grant themselves.
pub trait AccessGate {
    fn has_role(&self, role: Role, account_id: &AccountId) -> bool;

    fn grant_role(&mut self, role: Role, account_id: &AccountId);

    fn revoke_role(&mut self, role: Role, account_id: &AccountId);
}
