use std::fmt;

use model::base_types::{OrderIdx, Time};

/// One committed order of a route.
///
/// The scheduled time is fixed at commit and never changes afterwards, even
/// though later orders are appended behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    order: OrderIdx,
    target_time: Time,
    scheduled_time: Time,
}

impl Assignment {
    pub fn new(order: OrderIdx, target_time: Time, scheduled_time: Time) -> Assignment {
        Assignment {
            order,
            target_time,
            scheduled_time,
        }
    }

    pub fn order(&self) -> OrderIdx {
        self.order
    }

    pub fn target_time(&self) -> Time {
        self.target_time
    }

    pub fn scheduled_time(&self) -> Time {
        self.scheduled_time
    }

    pub fn lateness(&self) -> Time {
        self.scheduled_time - self.target_time
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}(t:{},s:{})",
            self.order, self.target_time, self.scheduled_time
        )
    }
}
