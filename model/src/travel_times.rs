use std::fmt;

use crate::base_types::{MoverIdx, OrderIdx, Time};

/// From-node of a travel-time lookup: either an already delivered order or
/// the virtual origin a mover starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Order(OrderIdx),
    MoverOrigin(MoverIdx),
}

/// Square travel-time matrix over all orders and all mover origins.
///
/// Rows and columns `0..order_count` belong to the orders; the mover origin
/// of mover `m` sits at row `order_count + m`. Origins never appear as a
/// destination, so lookups always end at an order column.
pub struct TravelTimes {
    matrix: Vec<Vec<Time>>,
    order_count: usize,
    mover_count: usize,
}

// static functions:
impl TravelTimes {
    /// Validates the matrix shape before any solver runs.
    pub fn new(
        matrix: Vec<Vec<Time>>,
        order_count: usize,
        mover_count: usize,
    ) -> Result<TravelTimes, String> {
        let side = order_count + mover_count;
        if matrix.len() != side {
            return Err(format!(
                "Travel-time matrix must have {} rows ({} orders + {} movers) but has {}.",
                side,
                order_count,
                mover_count,
                matrix.len()
            ));
        }
        for (row_index, row) in matrix.iter().enumerate() {
            if row.len() != side {
                return Err(format!(
                    "Travel-time matrix must be square: row {} has {} entries instead of {}.",
                    row_index,
                    row.len(),
                    side
                ));
            }
        }
        Ok(TravelTimes {
            matrix,
            order_count,
            mover_count,
        })
    }
}

// methods:
impl TravelTimes {
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    pub fn mover_count(&self) -> usize {
        self.mover_count
    }

    pub fn travel_time(&self, from: Position, to: OrderIdx) -> Time {
        self.matrix[self.row_of(from)][to.idx()]
    }

    fn row_of(&self, from: Position) -> usize {
        match from {
            Position::Order(order) => order.idx(),
            Position::MoverOrigin(mover) => self.order_count + mover.idx(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Position::Order(order) => write!(f, "{}", order),
            Position::MoverOrigin(mover) => write!(f, "origin of {}", mover),
        }
    }
}
