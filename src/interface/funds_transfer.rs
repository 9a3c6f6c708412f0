use crate::domain::YoctoNear;
use near_sdk::AccountId;

/// Access to the pool's account balance.
pub trait FundsTransfer {
    /// The pool's current balance.
    ///
    /// This includes member deposits that have not been delegated plus any rewards that were paid
    /// out to the pool's account - thus it may exceed the pool's total stake.
    fn held_balance(&self) -> YoctoNear;

    /// returns false if the transfer failed, in which case no funds were moved
    fn send(&mut self, recipient: &AccountId, amount: YoctoNear) -> bool;
}
