use crate::base_types::{Idx, OrderIdx, Time};

/// All delivery orders of an instance. An order is fully described by its
/// index (which is also its row in the travel-time matrix) and its target
/// delivery time, fixed at creation.
pub struct Orders {
    target_times: Vec<Time>,
}

impl Orders {
    pub fn new(target_times: Vec<Time>) -> Orders {
        Orders { target_times }
    }

    pub fn count(&self) -> usize {
        self.target_times.len()
    }

    pub fn target_time(&self, order: OrderIdx) -> Time {
        self.target_times[order.idx()]
    }

    pub fn indices(&self) -> impl Iterator<Item = OrderIdx> + '_ {
        (0..self.target_times.len()).map(|i| OrderIdx::from(i as Idx))
    }
}
