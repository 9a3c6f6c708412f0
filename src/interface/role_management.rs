use crate::errors::PoolResult;
use near_sdk::AccountId;

pub trait RoleManagement {
    /// ## Errors
    /// - if the caller is not both an admin and a member
    fn grant_admin(&mut self, caller: &AccountId, account_id: &AccountId) -> PoolResult<()>;

    /// ## Errors
    /// - if the caller is not an admin
    fn grant_member(&mut self, caller: &AccountId, account_id: &AccountId) -> PoolResult<()>;

    /// Revokes the account's member role. The account's stake is left untouched.
    ///
    /// ## Errors
    /// - if the caller is not an admin
    fn remove_member(&mut self, caller: &AccountId, account_id: &AccountId) -> PoolResult<()>;
}
