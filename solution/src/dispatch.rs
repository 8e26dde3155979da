
use std::fmt;

use itertools::Itertools;
use model::base_types::{Cost, MoverIdx, OrderIdx};

use crate::route::Route;

/// Final outcome of one solver run: one route per mover, the orders that
/// could not be placed, and the accumulated total cost (per-assignment
/// costs plus one cancellation penalty per cancelled order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    routes: Vec<Route>,
    cancelled: Vec<OrderIdx>,
    total_cost: Cost,
}

// static functions:
impl Dispatch {
    pub fn new(routes: Vec<Route>, cancelled: Vec<OrderIdx>, total_cost: Cost) -> Dispatch {
        Dispatch {
            routes,
            cancelled,
            total_cost,
        }
    }
}

// methods:
impl Dispatch {
    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter()
    }

    pub fn route_of(&self, mover: MoverIdx) -> &Route {
        &self.routes[mover.idx()]
    }

    pub fn cancelled(&self) -> &[OrderIdx] {
        &self.cancelled
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn assigned_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// True iff every order index in `0..order_count` shows up exactly once
    /// across all routes and the cancelled set.
    pub fn covers_every_order_exactly_once(&self, order_count: usize) -> bool {
        let mut seen = vec![false; order_count];
        let assigned = self.routes.iter().flat_map(Route::iter).map(|a| a.order());
        for order in assigned.chain(self.cancelled.iter().copied()) {
            if order.idx() >= order_count || seen[order.idx()] {
                return false;
            }
            seen[order.idx()] = true;
        }
        seen.into_iter().all(|s| s)
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for route in &self.routes {
            writeln!(f, "{}", route)?;
        }
        writeln!(f, "cancelled: {}", self.cancelled.iter().format(" "))?;
        write!(f, "total cost: {}", self.total_cost)
    }
}
