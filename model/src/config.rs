use crate::base_types::{Cost, Idx, MoverIdx};

/// Penalty charged for every order that ends up cancelled.
pub const DEFAULT_CANCELLATION_PENALTY: Cost = Cost::Finite(10);

/// Session-scoped solve parameters.
///
/// Every solver run receives its own immutable config (shared by Arc), so
/// independent comparison runs over the same instance cannot interfere with
/// each other.
#[derive(Debug)]
pub struct Config {
    pub mover_count: usize,
    pub cancellation_penalty: Cost,
}

impl Config {
    pub fn new(mover_count: usize) -> Config {
        Config {
            mover_count,
            cancellation_penalty: DEFAULT_CANCELLATION_PENALTY,
        }
    }

    pub fn movers(&self) -> impl Iterator<Item = MoverIdx> {
        (0..self.mover_count).map(|m| MoverIdx::from(m as Idx))
    }
}
