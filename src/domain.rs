//! defines the internal domain model used to implement the pool's business logic
//!
//! NOTE: the domain model is separate from the interface model, which is what is exposed as JSON

mod pool_record;
mod pool_state;
mod roles;
mod stake_ledger;
mod yocto_near;

pub use pool_record::PoolRecord;
pub use pool_state::PoolState;
pub use roles::{Role, RoleRegistry};
pub use stake_ledger::StakeLedger;
pub use yocto_near::YoctoNear;
