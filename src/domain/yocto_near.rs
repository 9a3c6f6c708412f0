use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use std::fmt::{self, Display, Formatter};

#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
#[borsh(crate = "near_sdk::borsh")]
pub struct YoctoNear(pub u128);

impl From<u128> for YoctoNear {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<YoctoNear> for u128 {
    fn from(value: YoctoNear) -> Self {
        value.0
    }
}

impl From<YoctoNear> for U128 {
    fn from(value: YoctoNear) -> Self {
        U128(value.0)
    }
}

impl From<U128> for YoctoNear {
    fn from(value: U128) -> Self {
        Self(value.0)
    }
}

impl YoctoNear {
    pub const ZERO: YoctoNear = YoctoNear(0);

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: YoctoNear) -> Option<YoctoNear> {
        self.0.checked_add(other.0).map(YoctoNear)
    }

    pub fn checked_sub(self, other: YoctoNear) -> Option<YoctoNear> {
        self.0.checked_sub(other.0).map(YoctoNear)
    }
}

impl Display for YoctoNear {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
