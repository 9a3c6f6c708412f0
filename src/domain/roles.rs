use crate::interface::AccessGate;
use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    AccountId,
};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[borsh(crate = "near_sdk::borsh")]
#[serde(crate = "near_sdk::serde")]
pub enum Role {
    /// lifecycle control: target changes, revoke scheduling, resets and role grants
    Admin,
    /// deposit and withdraw rights
    Member,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("Admin"),
            Role::Member => f.write_str("Member"),
        }
    }
}

/// In-memory [AccessGate] that can be persisted alongside the pool record.
///
/// The registry does not check who is granting - the pool gates the caller before delegating here.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default)]
#[borsh(crate = "near_sdk::borsh")]
pub struct RoleRegistry {
    admins: BTreeSet<AccountId>,
    members: BTreeSet<AccountId>,
}

impl RoleRegistry {
    fn accounts(&self, role: Role) -> &BTreeSet<AccountId> {
        match role {
            Role::Admin => &self.admins,
            Role::Member => &self.members,
        }
    }

    fn accounts_mut(&mut self, role: Role) -> &mut BTreeSet<AccountId> {
        match role {
            Role::Admin => &mut self.admins,
            Role::Member => &mut self.members,
        }
    }

    pub fn count(&self, role: Role) -> usize {
        self.accounts(role).len()
    }
}

impl AccessGate for RoleRegistry {
    fn has_role(&self, role: Role, account_id: &AccountId) -> bool {
        self.accounts(role).contains(account_id)
    }

    fn grant_role(&mut self, role: Role, account_id: &AccountId) {
        self.accounts_mut(role).insert(account_id.clone());
    }

    fn revoke_role(&mut self, role: Role, account_id: &AccountId) {
        self.accounts_mut(role).remove(account_id);
    }
}
