//! defines the interfaces that the pool exposes externally and the interfaces of the external
//! services that the pool depends on

mod access_gate;
mod delegation_dao;
mod funds_transfer;
mod model;
mod operator;
mod role_management;
mod staking_backend;

pub use access_gate::*;
pub use delegation_dao::*;
pub use funds_transfer::*;
pub use model::*;
pub use operator::*;
pub use role_management::*;
pub use staking_backend::*;
