use derive_more::Display;
use derive_more::From;

pub mod cost;

pub use cost::Cost;

pub type Idx = u16;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "ord{}", _0)]
pub struct OrderIdx(pub Idx);

impl OrderIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "mov{}", _0)]
pub struct MoverIdx(pub Idx);

impl MoverIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

/// Delivery times and travel times share one scalar clock. Signed, as
/// lateness (scheduled minus target) can be negative.
pub type Time = i64;

pub type CostValue = u64;
