use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::base_types::Time;

const MIN_TRAVEL_TIME: Time = 5;
const MAX_TRAVEL_TIME: Time = 30;
const EARLIEST_TARGET_TIME: Time = 10;

/// Raw synthetic instance data, ready to be handed to the constructors of
/// `Orders` and `TravelTimes`.
pub struct GeneratedInstance {
    pub travel_times: Vec<Vec<Time>>,
    pub target_times: Vec<Time>,
}

/// Generates a deterministic synthetic instance: travel times drawn
/// uniformly per node pair, target times spread over a delivery horizon
/// wide enough that movers can reach most orders in time. The same seed and
/// counts always produce the same instance.
pub fn generate_instance(order_count: usize, mover_count: usize, seed: u64) -> GeneratedInstance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let side = order_count + mover_count;

    let mut travel_times = vec![vec![0; side]; side];
    for from in 0..side {
        for to in 0..side {
            if from != to {
                travel_times[from][to] = rng.gen_range(MIN_TRAVEL_TIME..=MAX_TRAVEL_TIME);
            }
        }
    }

    // roughly one route of average-length legs per mover
    let horizon = EARLIEST_TARGET_TIME
        + MAX_TRAVEL_TIME * (order_count as Time) / (mover_count.max(1) as Time);
    let target_times = (0..order_count)
        .map(|_| rng.gen_range(EARLIEST_TARGET_TIME..=horizon))
        .collect();

    GeneratedInstance {
        travel_times,
        target_times,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_instance, EARLIEST_TARGET_TIME, MAX_TRAVEL_TIME, MIN_TRAVEL_TIME};

    #[test]
    fn same_seed_gives_identical_instances() {
        let first = generate_instance(20, 3, 42);
        let second = generate_instance(20, 3, 42);

        assert_eq!(first.travel_times, second.travel_times);
        assert_eq!(first.target_times, second.target_times);
    }

    #[test]
    fn generated_shape_covers_orders_and_origins() {
        let instance = generate_instance(12, 4, 7);

        assert_eq!(instance.target_times.len(), 12);
        assert_eq!(instance.travel_times.len(), 16);
        assert!(instance.travel_times.iter().all(|row| row.len() == 16));
    }

    #[test]
    fn generated_values_stay_in_their_ranges() {
        let instance = generate_instance(15, 2, 3);

        for (from, row) in instance.travel_times.iter().enumerate() {
            for (to, &travel_time) in row.iter().enumerate() {
                if from == to {
                    assert_eq!(travel_time, 0);
                } else {
                    assert!((MIN_TRAVEL_TIME..=MAX_TRAVEL_TIME).contains(&travel_time));
                }
            }
        }
        assert!(instance
            .target_times
            .iter()
            .all(|&target| target >= EARLIEST_TARGET_TIME));
    }
}
