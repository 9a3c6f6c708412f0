use near_sdk::env;
use std::fmt::Debug;

/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

/// wrapper around `near_sdk::env::log_str()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log_str(&format!("{:#?}", event));
}
