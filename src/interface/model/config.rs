use near_sdk::{
    json_types::U128,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Config {
    pub min_delegation_stake: Option<U128>,
}
