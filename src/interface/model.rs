mod config;
mod pool_snapshot;

pub use config::Config;
pub use pool_snapshot::PoolSnapshot;
