use model::base_types::OrderIdx;
use model::orders::Orders;

/// Pool of orders awaiting assignment.
///
/// The backing vector always contains every order. The prefix
/// `[0..active)` holds the orders still up for scheduling, sorted by
/// ascending target time; retired orders accumulate behind it in
/// retirement order. Whatever is still active once the solvers are done is
/// the cancelled set.
pub struct OrderPool {
    entries: Vec<OrderIdx>,
    active: usize,
}

// static functions:
impl OrderPool {
    /// Builds the pool with every order active, sorted by target time. A
    /// new order is placed in front of the first entry whose target is not
    /// smaller than its own, so among equal targets the later-created order
    /// comes first.
    pub fn initialize(orders: &Orders) -> OrderPool {
        let mut entries: Vec<OrderIdx> = Vec::with_capacity(orders.count());
        for order in orders.indices() {
            let target_time = orders.target_time(order);
            let position = entries
                .iter()
                .position(|&entry| orders.target_time(entry) >= target_time)
                .unwrap_or(entries.len());
            entries.insert(position, order);
        }
        let active = entries.len();
        OrderPool { entries, active }
    }
}

// methods:
impl OrderPool {
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Restartable scan over exactly the active prefix.
    pub fn iter_active(&self) -> impl Iterator<Item = OrderIdx> + '_ {
        self.entries[..self.active].iter().copied()
    }

    pub fn get_active(&self, position: usize) -> OrderIdx {
        assert!(position < self.active, "position {} is not active", position);
        self.entries[position]
    }

    /// Moves an active order behind the active prefix (to the very back of
    /// the full sequence) without disturbing the relative order of the
    /// remaining active entries, and shrinks the prefix by one.
    pub fn retire(&mut self, order: OrderIdx) {
        let position = self.entries[..self.active]
            .iter()
            .position(|&entry| entry == order)
            .expect("retire called with an order that is not active");
        self.entries[position..].rotate_left(1);
        self.active -= 1;
    }

    /// The orders never assigned to any mover; meaningful once all solvers
    /// are done with the pool.
    pub fn remaining_active(&self) -> Vec<OrderIdx> {
        self.entries[..self.active].to_vec()
    }
}
