use crate::domain::YoctoNear;
use near_sdk::AccountId;

/// Events are logged via [crate::near::log]
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    Deposit {
        member: AccountId,
        amount: u128,
    },
    Withdrawal {
        member: AccountId,
        recipient: AccountId,
        amount: u128,
    },
    /// the minimum delegation stake was reached and the pool's balance was delegated
    Delegated {
        target: AccountId,
        amount: u128,
    },
    RevokeScheduled {
        target: AccountId,
    },
    Revoked {
        target: AccountId,
    },
    TargetChanged {
        old_target: AccountId,
        new_target: AccountId,
    },
    Reset,
}

impl Event {
    pub fn deposit(member: &AccountId, amount: YoctoNear) -> Self {
        Event::Deposit {
            member: member.clone(),
            amount: amount.value(),
        }
    }

    pub fn withdrawal(member: &AccountId, recipient: &AccountId, amount: YoctoNear) -> Self {
        Event::Withdrawal {
            member: member.clone(),
            recipient: recipient.clone(),
            amount: amount.value(),
        }
    }

    pub fn delegated(target: &AccountId, amount: YoctoNear) -> Self {
        Event::Delegated {
            target: target.clone(),
            amount: amount.value(),
        }
    }

    pub fn emit(self) {
        crate::near::log(self);
    }
}
