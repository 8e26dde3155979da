use std::fmt;

use itertools::Itertools;
use model::base_types::{MoverIdx, Time};
use model::travel_times::Position;

use crate::assignment::Assignment;

/// The ordered route of one mover, built up one assignment at a time.
///
/// The tail of the route is the predecessor of the next candidate order; an
/// empty route starts at the mover's virtual origin at time zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    mover: MoverIdx,
    assignments: Vec<Assignment>,
}

// static functions:
impl Route {
    pub fn empty(mover: MoverIdx) -> Route {
        Route {
            mover,
            assignments: Vec::new(),
        }
    }
}

// methods:
impl Route {
    pub fn mover(&self) -> MoverIdx {
        self.mover
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments.iter()
    }

    /// Position and delivery time of the route tail, i.e. the predecessor
    /// of whatever is assigned next.
    pub fn last_position(&self) -> (Position, Time) {
        match self.assignments.last() {
            Some(assignment) => (Position::Order(assignment.order()), assignment.scheduled_time()),
            None => (Position::MoverOrigin(self.mover), 0),
        }
    }

    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.mover, self.assignments.iter().format(" - "))
    }
}
