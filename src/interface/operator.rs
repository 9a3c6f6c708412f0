use crate::errors::PoolResult;
use crate::interface::{Config, PoolSnapshot};
use near_sdk::AccountId;

pub trait Operator {
    ////////////////////////////
    //     VIEW METHODS    ///
    // //////////////////////

    /// returns the pool's state
    /// - useful for monitoring and debugging
    fn pool_snapshot(&self) -> PoolSnapshot;

    fn config(&self) -> Config;

    //////////////////////////////
    //     CHANGE METHODS    ///
    // ////////////////////////

    /// Only the specified fields are updated.
    ///
    /// ## Errors
    /// - if the caller is not an admin
    /// - if the config is invalid
    fn update_config(&mut self, caller: &AccountId, config: Config) -> PoolResult<Config>;
}
